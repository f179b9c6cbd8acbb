//! Linear regression trained by batch gradient descent.
//!
//! Features are z-score normalized with statistics computed once on the
//! training data, then weights and bias are found by a fixed number of
//! full-batch gradient steps on the half mean squared error. The cost after
//! every step is recorded for convergence inspection.
//!
//! # Example
//!
//! ```rust,ignore
//! use gd_regression::prelude::*;
//!
//! // Fit a model
//! let fitted = GradientDescentRegressor::builder()
//!     .learning_rate(0.1)
//!     .n_iterations(1000)
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! // Make predictions
//! let predictions = fitted.predict(&x_new)?;
//!
//! // Inspect training
//! println!("R² = {}", fitted.score(&x, &y)?);
//! println!("final cost = {:?}", fitted.cost_history().last());
//! ```

pub mod core;
pub mod metrics;
pub mod preprocessing;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CostHistory, GradientDescentOptions, GradientDescentOptionsBuilder, OptionsError,
        TrainingProgress,
    };
    pub use crate::metrics::{evaluate, mean_squared_error, r2_score, EvaluationReport};
    pub use crate::preprocessing::{FittedScaler, StandardScaler};
    pub use crate::solvers::{
        FittedGradientDescent, FittedRegressor, GradientDescentRegressor, LinearRegressionGd,
        RegressionError, Regressor,
    };
}

pub use crate::core::{CostHistory, GradientDescentOptions, OptionsError, TrainingProgress};
pub use crate::solvers::{
    FittedGradientDescent, FittedRegressor, GradientDescentRegressor, LinearRegressionGd,
    RegressionError, Regressor,
};
