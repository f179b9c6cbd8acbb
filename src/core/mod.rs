//! Core types for gradient descent regression.

mod history;
mod options;
mod progress;

pub use history::CostHistory;
pub use options::{GradientDescentOptions, GradientDescentOptionsBuilder, OptionsError};
pub use progress::{log_progress, TrainingProgress};
