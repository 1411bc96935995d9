//! dense-base: small helpers for dense numeric matrices.
//!
//! This crate provides a paired row shuffle for feature/target matrices,
//! an element-wise sigmoid, tab-separated and list-style text rendering of
//! matrices, rows and columns, and shallow public-field copies of plain
//! records.
//!
//! The matrix helpers are written against the `math::DenseMatrix` trait so
//! any row-addressable container can use them; `math::Array2` is the
//! bundled row-major implementation. Randomness is always injectable so
//! callers can make shuffles reproducible.
pub mod activation;
pub mod config;
pub mod error;
pub mod format;
pub mod math;
pub mod record;
pub mod shuffle;

pub use activation::{dense_sigmoid, sigmoid, sigmoid_into};
pub use error::MatrixError;
pub use format::{format_general, mat_col_str, mat_row_str, mat_str};
pub use record::{copy_struct, ShallowCopy};
pub use shuffle::{dense_shuffle, dense_shuffle_with_rng};
