//! Regression solvers.

mod traits;
mod gradient_descent;
mod model;
pub mod objective;

pub use traits::{FittedRegressor, Regressor, RegressionError};
pub use gradient_descent::{
    FittedGradientDescent, GradientDescentRegressor, GradientDescentRegressorBuilder,
};
pub use model::LinearRegressionGd;
