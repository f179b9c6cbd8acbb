//! Train/test evaluation of a fitted model.

use super::{mean_squared_error, r2_score};
use crate::solvers::{FittedRegressor, RegressionError};
use faer::{Col, Mat};
use std::fmt;

/// Error and R² of a model on its training and held-out data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationReport {
    pub train_mse: f64,
    pub test_mse: f64,
    pub train_r2: f64,
    pub test_r2: f64,
}

impl EvaluationReport {
    /// Difference between training and test R²; large values suggest overfitting.
    pub fn generalization_gap(&self) -> f64 {
        self.train_r2 - self.test_r2
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training MSE: {:.4}", self.train_mse)?;
        writeln!(f, "Testing MSE:  {:.4}", self.test_mse)?;
        writeln!(f, "Training R²:  {:.4}", self.train_r2)?;
        write!(f, "Testing R²:   {:.4}", self.test_r2)
    }
}

/// Evaluate `model` on a training and a test split.
pub fn evaluate<M: FittedRegressor>(
    model: &M,
    x_train: &Mat<f64>,
    x_test: &Mat<f64>,
    y_train: &Col<f64>,
    y_test: &Col<f64>,
) -> Result<EvaluationReport, RegressionError> {
    let train_pred = model.predict(x_train)?;
    let test_pred = model.predict(x_test)?;

    Ok(EvaluationReport {
        train_mse: mean_squared_error(y_train, &train_pred)?,
        test_mse: mean_squared_error(y_test, &test_pred)?,
        train_r2: r2_score(y_train, &train_pred)?,
        test_r2: r2_score(y_test, &test_pred)?,
    })
}
