//! Element-wise logistic function over dense matrices.

use num_traits::Float;

use crate::error::MatrixError;
use crate::math::DenseMatrix;

/// Logistic function `1 / (1 + e^-x)`.
///
/// No clamping: very negative inputs overflow `exp` to infinity and give 0,
/// very positive inputs give 1.
#[inline]
pub fn sigmoid<T: Float>(x: T) -> T {
    T::one() / (T::one() + (-x).exp())
}

/// Apply [`sigmoid`] to every entry of `x`, writing into `dst`.
///
/// When `dst` is `None` a zero matrix with the shape of `x` is allocated
/// first. The destination is returned so calls can be chained; `x` is left
/// untouched.
///
/// # Errors
///
/// `MatrixError::ShapeMismatch` when a supplied `dst` is not the shape of `x`.
pub fn dense_sigmoid<M>(dst: Option<M>, x: &M) -> Result<M, MatrixError>
where
    M: DenseMatrix,
    M::Elem: Float,
{
    let mut dst = match dst {
        Some(dst) => dst,
        None => {
            let (rows, cols) = x.dims();
            log::debug!("Allocating {}x{} destination for sigmoid", rows, cols);
            M::zeros(rows, cols)
        }
    };
    sigmoid_into(&mut dst, x)?;
    Ok(dst)
}

/// Apply [`sigmoid`] to every entry of `x`, writing into the borrowed `dst`.
///
/// `dst` and `x` may be different matrix types as long as they share an
/// element type.
pub fn sigmoid_into<D, X>(dst: &mut D, x: &X) -> Result<(), MatrixError>
where
    D: DenseMatrix,
    D::Elem: Float,
    X: DenseMatrix<Elem = D::Elem>,
{
    let (rows, cols) = x.dims();
    if dst.dims() != (rows, cols) {
        return Err(MatrixError::ShapeMismatch {
            expected: (rows, cols),
            found: dst.dims(),
        });
    }

    for i in 0..rows {
        for j in 0..cols {
            dst.set(i, j, sigmoid(x.at(i, j)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_exactly_half() {
        assert_eq!(sigmoid(0.0f64), 0.5);
        assert_eq!(sigmoid(0.0f32), 0.5);
    }

    #[test]
    fn sigmoid_saturates_without_nan() {
        assert_eq!(sigmoid(-1000.0f64), 0.0);
        assert_eq!(sigmoid(1000.0f64), 1.0);
        assert!(sigmoid(f64::NAN).is_nan());
    }
}
