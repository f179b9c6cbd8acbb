//! Stateful gradient descent model with an explicit untrained state.

use crate::core::{CostHistory, OptionsError, TrainingProgress};
use crate::solvers::gradient_descent::{FittedGradientDescent, GradientDescentRegressor};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use faer::{Col, Mat};

static EMPTY_HISTORY: CostHistory = CostHistory::new();

/// Gradient descent linear regression that is trained in place.
///
/// Starts untrained; `predict` and `score` return
/// [`RegressionError::UntrainedModel`] until `fit` succeeds. Every successful
/// `fit` replaces the previous parameters, statistics and cost history. A
/// failed `fit` leaves the model exactly as it was.
///
/// # Example
///
/// ```rust,ignore
/// use gd_regression::solvers::LinearRegressionGd;
///
/// let mut model = LinearRegressionGd::new(0.1, 1000)?;
/// let r2 = model.fit(&x_train, &y_train)?.score(&x_test, &y_test)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearRegressionGd {
    regressor: GradientDescentRegressor,
    fitted: Option<FittedGradientDescent>,
}

impl LinearRegressionGd {
    /// Create an untrained model with the given hyperparameters.
    pub fn new(learning_rate: f64, n_iterations: usize) -> Result<Self, OptionsError> {
        let regressor = GradientDescentRegressor::builder()
            .learning_rate(learning_rate)
            .n_iterations(n_iterations)
            .build()?;
        Ok(Self::from_regressor(regressor))
    }

    /// Create an untrained model around a configured regressor.
    pub fn from_regressor(regressor: GradientDescentRegressor) -> Self {
        Self {
            regressor,
            fitted: None,
        }
    }

    /// The regressor holding this model's hyperparameters.
    pub fn regressor(&self) -> &GradientDescentRegressor {
        &self.regressor
    }

    /// Whether `fit` has completed successfully.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The trained state, if any.
    pub fn fitted(&self) -> Option<&FittedGradientDescent> {
        self.fitted.as_ref()
    }

    /// Train on `x`/`y`, returning `self` for chaining.
    pub fn fit(&mut self, x: &Mat<f64>, y: &Col<f64>) -> Result<&mut Self, RegressionError> {
        self.fitted = Some(self.regressor.fit(x, y)?);
        Ok(self)
    }

    /// Train on `x`/`y`, reporting progress to `observer`.
    pub fn fit_with_progress<F>(
        &mut self,
        x: &Mat<f64>,
        y: &Col<f64>,
        observer: F,
    ) -> Result<&mut Self, RegressionError>
    where
        F: FnMut(&TrainingProgress),
    {
        self.fitted = Some(self.regressor.fit_with_progress(x, y, observer)?);
        Ok(self)
    }

    /// Predict targets for `x`.
    pub fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        self.trained()?.predict(x)
    }

    /// Coefficient of determination (R²) on `x`/`y`.
    pub fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        self.trained()?.score(x, y)
    }

    /// Learned weights, or `None` before training.
    pub fn weights(&self) -> Option<&Col<f64>> {
        self.fitted.as_ref().map(|f| f.weights())
    }

    /// Learned bias, or `None` before training.
    pub fn bias(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.bias())
    }

    /// Cost history of the latest fit; empty before training.
    pub fn cost_history(&self) -> &CostHistory {
        self.fitted
            .as_ref()
            .map_or(&EMPTY_HISTORY, |f| f.cost_history())
    }

    /// Consume the model and return its trained state.
    pub fn into_fitted(self) -> Result<FittedGradientDescent, RegressionError> {
        self.fitted.ok_or(RegressionError::UntrainedModel)
    }

    fn trained(&self) -> Result<&FittedGradientDescent, RegressionError> {
        self.fitted.as_ref().ok_or(RegressionError::UntrainedModel)
    }
}

impl From<GradientDescentRegressor> for LinearRegressionGd {
    fn from(regressor: GradientDescentRegressor) -> Self {
        Self::from_regressor(regressor)
    }
}
