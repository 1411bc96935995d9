//! Plain-text rendering of dense matrices.
//!
//! `mat_str` lays one or more matrices side by side as tab-separated rows,
//! which is handy for eyeballing features next to targets in logs.
//! `mat_row_str` and `mat_col_str` render a single row or column as a
//! bracketed list. Numbers are written in general-precision form
//! (see [`format_general`]).

use std::fmt;

use num_traits::Float;

use crate::error::MatrixError;
use crate::math::{Array1, DenseMatrix};

/// Decimal exponent from which the shortest form switches to scientific notation.
const SCIENTIFIC_FROM_EXP: i32 = 6;
/// Decimal exponent below which the shortest form switches to scientific notation.
const SCIENTIFIC_BELOW_EXP: i32 = -4;

/// Format `value` using the shortest digits that round-trip.
///
/// Plain decimal notation is used while the decimal exponent lies in
/// `[-4, 6)`, scientific notation with a signed, two-digit-minimum exponent
/// otherwise:
///
/// | value | output |
/// |---|---|
/// | `1.0` | `1` |
/// | `0.0001` | `0.0001` |
/// | `0.00001` | `1e-05` |
/// | `1234567.0` | `1.234567e+06` |
/// | `f64::INFINITY` | `+Inf` |
pub fn format_general<T>(value: T) -> String
where
    T: Float + fmt::Display + fmt::LowerExp,
{
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let inf = if value.is_sign_positive() { "+Inf" } else { "-Inf" };
        return inf.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < SCIENTIFIC_BELOW_EXP || exponent >= SCIENTIFIC_FROM_EXP {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        format!("{}", value)
    }
}

/// Display adapter writing the wrapped number through [`format_general`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct General<T>(pub T);

impl<T> fmt::Display for General<T>
where
    T: Float + fmt::Display + fmt::LowerExp,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_general(self.0))
    }
}

/// Render `matrices` side by side, one text line per row.
///
/// Each line holds, in argument order, every matrix's values for that row,
/// all separated by tabs, and ends with a newline. Column counts may differ
/// between matrices. No matrices yields an empty string.
///
/// Matrices of different types can be mixed through trait objects:
/// `mat_str::<dyn DenseMatrix<Elem = f64>>(&[&a, &b])`.
///
/// # Errors
///
/// `MatrixError::RowCountMismatch` when a matrix does not have the row
/// count of the first one.
pub fn mat_str<M>(matrices: &[&M]) -> Result<String, MatrixError>
where
    M: DenseMatrix + ?Sized,
    M::Elem: Float + fmt::Display + fmt::LowerExp,
{
    let Some(first) = matrices.first() else {
        return Ok(String::new());
    };

    let (n_samples, _) = first.dims();
    for matrix in matrices.iter().skip(1) {
        let (rows, _) = matrix.dims();
        if rows != n_samples {
            return Err(MatrixError::RowCountMismatch {
                left: n_samples,
                right: rows,
            });
        }
    }

    let mut out = String::new();
    for i in 0..n_samples {
        let mut separator = "";
        for matrix in matrices {
            let (_, n_features) = matrix.dims();
            for j in 0..n_features {
                out.push_str(separator);
                out.push_str(&format_general(matrix.at(i, j)));
                separator = "\t";
            }
        }
        out.push('\n');
    }
    Ok(out)
}

/// Render column `col` of `x` as a bracketed list, e.g. `[2, 4]`.
///
/// Panics when `col` is out of bounds.
pub fn mat_col_str<M>(x: &M, col: usize) -> String
where
    M: DenseMatrix + ?Sized,
    M::Elem: Float + fmt::Display + fmt::LowerExp,
{
    let (n_samples, n_features) = x.dims();
    assert!(col < n_features, "column index out of bounds");
    let values: Array1<General<M::Elem>> = (0..n_samples)
        .map(|row| General(x.at(row, col)))
        .collect();
    values.to_string()
}

/// Render row `row` of `x` as a bracketed list, e.g. `[1, 2]`.
///
/// Panics when `row` is out of bounds.
pub fn mat_row_str<M>(x: &M, row: usize) -> String
where
    M: DenseMatrix + ?Sized,
    M::Elem: Float + fmt::Display + fmt::LowerExp,
{
    let (n_samples, n_features) = x.dims();
    assert!(row < n_samples, "row index out of bounds");
    let values: Array1<General<M::Elem>> = (0..n_features)
        .map(|col| General(x.at(row, col)))
        .collect();
    values.to_string()
}
