//! Core traits for regression estimators.

use crate::core::OptionsError;
use crate::metrics::r2_score;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during regression fitting, prediction or scoring.
#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("feature mismatch: model was fit with {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("length mismatch: expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("model is not fitted: call fit before predict or score")]
    UntrainedModel,

    #[error("all target values are identical: R² is undefined")]
    DegenerateTarget,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// A regression estimator that can be fit to data.
///
/// This trait follows the sklearn pattern where fitting returns a fitted model
/// that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    /// * `y` - Target vector of length n_samples
    ///
    /// # Returns
    /// A fitted model that can make predictions.
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Make predictions on new data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    ///
    /// # Returns
    /// Predicted values vector of length n_samples.
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError>;

    /// Learned weights, one per feature.
    fn weights(&self) -> &Col<f64>;

    /// Learned bias (intercept).
    fn bias(&self) -> f64;

    /// Calculate the score (R²) on new data.
    ///
    /// # Arguments
    /// * `x` - Design matrix
    /// * `y` - True target values
    ///
    /// # Errors
    /// `DegenerateTarget` when every value of `y` is identical, since the
    /// total sum of squares is then zero.
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }

        let predictions = self.predict(x)?;
        r2_score(y, &predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_error_converts() {
        let err: RegressionError = OptionsError::InvalidIterations(0).into();
        assert_eq!(
            err,
            RegressionError::InvalidOptions(OptionsError::InvalidIterations(0))
        );
        assert!(err.to_string().contains("n_iterations"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = RegressionError::DimensionMismatch { x_rows: 3, y_len: 2 };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: X has 3 rows but y has 2 elements"
        );
    }
}
