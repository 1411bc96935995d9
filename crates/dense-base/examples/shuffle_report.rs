use anyhow::Result;
use dense_base::config::RngConfig;
use dense_base::math::Array2;
use dense_base::record::copy_struct;
use dense_base::{dense_shuffle_with_rng, dense_sigmoid, mat_col_str, mat_row_str, mat_str};

dense_base::shallow_record! {
    #[derive(Debug, Default)]
    struct ShuffleRun {
        pub name: String,
        pub seed: Option<u64>,
        rows_seen: usize,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Tiny synthetic dataset: 5 samples, 2 features, 1 label column.
    // The first feature doubles as a sample id so the pairing is visible.
    let mut x = Array2::from_shape_vec(
        (5, 2),
        vec![
            0.0, -2.0, //
            1.0, -1.0, //
            2.0, 0.0, //
            3.0, 1.0, //
            4.0, 2.0, //
        ],
    )?;
    let mut y = Array2::from_shape_vec((5, 1), vec![0.0, 10.0, 20.0, 30.0, 40.0])?;

    let config: RngConfig = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "42".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;
    let mut rng = config.rng();

    println!("Before shuffle:\n{}", mat_str(&[&x, &y])?);
    dense_shuffle_with_rng(&mut x, &mut y, &mut rng)?;
    println!("After shuffle:\n{}", mat_str(&[&x, &y])?);

    let activated = dense_sigmoid(None, &x)?;
    println!("Sigmoid of features:\n{}", mat_str(&[&activated])?);
    println!("Sample ids: {}", mat_col_str(&x, 0));
    println!("First shuffled row: {}", mat_row_str(&x, 0));

    let run = ShuffleRun {
        name: "synthetic".to_string(),
        seed: config.seed,
        rows_seen: x.nrows(),
    };
    let summary = copy_struct(&run);
    println!(
        "Run {:?} (seed {:?}): rows_seen is {} in the copy, {} in the source",
        summary.name, summary.seed, summary.rows_seen, run.rows_seen
    );

    Ok(())
}
