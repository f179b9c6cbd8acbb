//! Utility functions.

mod matrix;

pub use matrix::{center_vector, column_statistics, detect_constant_columns, validate_dimensions};
