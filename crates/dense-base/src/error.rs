use std::error::Error;
use std::fmt;

/// Dimension disagreements between the matrices handed to one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Two matrices that must share a row count do not.
    RowCountMismatch { left: usize, right: usize },
    /// A destination matrix does not have the source's shape.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::RowCountMismatch { left, right } => write!(
                f,
                "Matrices must have the same number of rows ({} != {})",
                left, right
            ),
            MatrixError::ShapeMismatch { expected, found } => write!(
                f,
                "Destination shape ({}, {}) does not match source shape ({}, {})",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for MatrixError {}
