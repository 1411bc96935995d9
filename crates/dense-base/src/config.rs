use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Random source used by the shuffle helpers.
///
/// A fixed `seed` makes every shuffle reproducible; without one the
/// generator is seeded from OS entropy.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RngConfig {
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RngConfig {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Build the generator described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::debug!("Using seeded StdRng (seed = {})", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

impl FromStr for RngConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "entropy" | "random" => Ok(RngConfig { seed: None }),
            _ => s.parse::<u64>().map(RngConfig::seeded).map_err(|_| {
                format!(
                    "Unknown random source: {}. Expected an unsigned integer seed or `entropy`",
                    s
                )
            }),
        }
    }
}
