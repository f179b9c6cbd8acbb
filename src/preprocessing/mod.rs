//! Feature preprocessing.

mod scaler;

pub use scaler::{FittedScaler, StandardScaler};
