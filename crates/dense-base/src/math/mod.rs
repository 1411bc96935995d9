//! Small dense containers used throughout the crate.
//!
//! Provides the `DenseMatrix` capability trait, `Array2` (2D, row-major)
//! which implements it, and `Array1` (1D) used for extracted rows and
//! columns.
pub mod dense;
pub mod matrix;
pub mod vector;

pub use dense::DenseMatrix;
pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
