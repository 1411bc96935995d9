//! Integration tests for the random-source configuration.

use dense_base::config::RngConfig;
use rand::Rng;

#[test]
fn default_config_is_unseeded() {
    assert_eq!(RngConfig::default(), RngConfig { seed: None });
}

#[test]
fn seeded_configs_produce_identical_streams() {
    let cfg = RngConfig::seeded(42);
    let mut first = cfg.rng();
    let mut second = cfg.rng();
    let a: Vec<u32> = (0..8).map(|_| first.gen()).collect();
    let b: Vec<u32> = (0..8).map(|_| second.gen()).collect();
    assert_eq!(a, b);
}

#[test]
fn from_str_parses_seed_and_entropy() {
    assert_eq!("17".parse::<RngConfig>().unwrap(), RngConfig::seeded(17));
    assert_eq!(" 3 ".parse::<RngConfig>().unwrap(), RngConfig::seeded(3));
    assert_eq!("entropy".parse::<RngConfig>().unwrap(), RngConfig::new(None));
    assert_eq!("Random".parse::<RngConfig>().unwrap(), RngConfig::new(None));
}

#[test]
fn from_str_rejects_garbage() {
    let err = "-5".parse::<RngConfig>().unwrap_err();
    assert!(err.contains("Unknown random source"), "unexpected error: {}", err);
    assert!("seed".parse::<RngConfig>().is_err());
}

#[test]
fn config_serde_round_trip() {
    let cfg = RngConfig::seeded(7);
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(json, r#"{"seed":7}"#);
    let back: RngConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn config_missing_seed_defaults_to_none() {
    let cfg: RngConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.seed, None);
}
