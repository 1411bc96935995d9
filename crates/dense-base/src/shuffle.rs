//! Paired row shuffling for feature/target matrices.
//!
//! Both matrices receive the same permutation so row `i` of `x` keeps
//! describing the sample labelled by row `i` of `y`.

use rand::{thread_rng, Rng};

use crate::error::MatrixError;
use crate::math::DenseMatrix;

/// Shuffle the rows of `x` and `y` in place with the same random permutation.
///
/// Uses the thread-local generator. See [`dense_shuffle_with_rng`] to
/// supply a seeded one.
pub fn dense_shuffle<X, Y>(x: &mut X, y: &mut Y) -> Result<(), MatrixError>
where
    X: DenseMatrix,
    Y: DenseMatrix,
{
    let mut rng = thread_rng();
    dense_shuffle_with_rng(x, y, &mut rng)
}

/// Shuffle the rows of `x` and `y` in place with the same permutation drawn
/// from `rng`.
///
/// Fisher-Yates: for `i` from `rows - 1` down to 1, pick `j` uniformly in
/// `[0, i]` and swap rows `i` and `j` of both matrices. A single scratch row
/// per matrix is allocated up front.
///
/// # Errors
///
/// `MatrixError::RowCountMismatch` when the row counts differ. Neither
/// matrix is modified in that case.
pub fn dense_shuffle_with_rng<X, Y, R>(x: &mut X, y: &mut Y, rng: &mut R) -> Result<(), MatrixError>
where
    X: DenseMatrix,
    Y: DenseMatrix,
    R: Rng + ?Sized,
{
    let (n_samples, n_features) = x.dims();
    let (y_rows, n_outputs) = y.dims();
    if n_samples != y_rows {
        return Err(MatrixError::RowCountMismatch {
            left: n_samples,
            right: y_rows,
        });
    }

    log::debug!(
        "Shuffling {} paired rows ({} feature columns, {} output columns)",
        n_samples,
        n_features,
        n_outputs
    );

    if n_samples < 2 {
        return Ok(());
    }

    // Seed the scratch rows from row 0 so no zero value is required of the element type.
    let mut x_row = Vec::with_capacity(n_features);
    x_row.extend((0..n_features).map(|col| x.at(0, col)));
    let mut y_row = Vec::with_capacity(n_outputs);
    y_row.extend((0..n_outputs).map(|col| y.at(0, col)));

    for i in (1..n_samples).rev() {
        let j = rng.gen_range(0..=i);
        x.swap_rows(i, j, &mut x_row);
        y.swap_rows(i, j, &mut y_row);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Array2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_width_matrices_are_shuffled_without_panicking() {
        let mut x: Array2<f64> = Array2::zeros(4, 0);
        let mut y = Array2::from_shape_vec((4, 1), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        dense_shuffle_with_rng(&mut x, &mut y, &mut rng).unwrap();

        let mut labels = y.as_slice().to_vec();
        labels.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(labels, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(x.shape(), (4, 0));
    }
}
