//! Linear regression trained by batch gradient descent.

use crate::core::{
    log_progress, CostHistory, GradientDescentOptions, GradientDescentOptionsBuilder,
    OptionsError, TrainingProgress,
};
use crate::preprocessing::{FittedScaler, StandardScaler};
use crate::solvers::objective::{compute_cost, compute_gradients, predict_linear};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::validate_dimensions;
use faer::{Col, Mat};
use log::trace;

/// Linear regression estimator using batch gradient descent.
///
/// Minimizes: (1 / 2n) ||Xw + b - y||² over z-score normalized features
///
/// Training runs for exactly `n_iterations` full-batch steps with a fixed
/// learning rate. There is no convergence check, so the same inputs always
/// produce the same model. A learning rate that is too large for the data
/// makes the cost diverge; choosing a stable rate is up to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use gd_regression::solvers::{FittedRegressor, GradientDescentRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(4, 1, |i, _| (i + 1) as f64);
/// let y = Col::from_fn(4, |i| 2.0 * (i + 1) as f64);
///
/// let fitted = GradientDescentRegressor::builder()
///     .learning_rate(0.1)
///     .n_iterations(2000)
///     .build()?
///     .fit(&x, &y)?;
///
/// let prediction = fitted.predict(&Mat::from_fn(1, 1, |_, _| 5.0))?;
/// println!("Final cost: {:?}", fitted.cost_history().last());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GradientDescentRegressor {
    options: GradientDescentOptions,
}

impl GradientDescentRegressor {
    /// Create a new regressor with the given options.
    pub fn new(options: GradientDescentOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> GradientDescentRegressorBuilder {
        GradientDescentRegressorBuilder::default()
    }

    /// Get the options of this regressor.
    pub fn options(&self) -> &GradientDescentOptions {
        &self.options
    }

    /// Get the learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.options.learning_rate
    }

    /// Get the number of training iterations.
    pub fn n_iterations(&self) -> usize {
        self.options.n_iterations
    }

    /// Fit the model, calling `observer` every `report_every` iterations.
    ///
    /// The observer only sees a snapshot of the progress; it cannot influence
    /// the parameter updates. With `report_every` unset it is never called.
    pub fn fit_with_progress<F>(
        &self,
        x: &Mat<f64>,
        y: &Col<f64>,
        mut observer: F,
    ) -> Result<FittedGradientDescent, RegressionError>
    where
        F: FnMut(&TrainingProgress),
    {
        self.options.validate()?;
        validate_dimensions(x, y)?;

        let (scaler, x_norm) = StandardScaler::new().fit_transform(x)?;

        let n_features = x_norm.ncols();
        let n_iterations = self.options.n_iterations;
        let learning_rate = self.options.learning_rate;

        trace!(
            "gradient descent: {} samples, {} features, learning_rate={}, n_iterations={}",
            x_norm.nrows(),
            n_features,
            learning_rate,
            n_iterations
        );

        let mut weights = Col::zeros(n_features);
        let mut bias = 0.0;
        let mut cost_history = CostHistory::with_capacity(n_iterations);

        for iteration in 1..=n_iterations {
            // Both gradients come from the pre-update parameters
            let (dw, db) = compute_gradients(&x_norm, y, &weights, bias);

            for j in 0..n_features {
                weights[j] -= learning_rate * dw[j];
            }
            bias -= learning_rate * db;

            let cost = compute_cost(&x_norm, y, &weights, bias);
            cost_history.push(cost);

            if let Some(every) = self.options.report_every {
                if iteration % every == 0 {
                    observer(&TrainingProgress {
                        iteration,
                        n_iterations,
                        cost,
                    });
                }
            }
        }

        trace!("gradient descent finished: final cost {:?}", cost_history.last());

        Ok(FittedGradientDescent {
            options: self.options.clone(),
            scaler,
            weights,
            bias,
            cost_history,
        })
    }
}

impl Regressor for GradientDescentRegressor {
    type Fitted = FittedGradientDescent;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.fit_with_progress(x, y, log_progress)
    }
}

/// A fitted gradient descent model.
///
/// Weights and bias live in normalized feature space; predictions always pass
/// new data through the scaler fitted on the training set.
#[derive(Debug, Clone)]
pub struct FittedGradientDescent {
    options: GradientDescentOptions,
    scaler: FittedScaler,
    weights: Col<f64>,
    bias: f64,
    cost_history: CostHistory,
}

impl FittedGradientDescent {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &GradientDescentOptions {
        &self.options
    }

    /// Get the learning rate used for training.
    pub fn learning_rate(&self) -> f64 {
        self.options.learning_rate
    }

    /// Get the number of iterations used for training.
    pub fn n_iterations(&self) -> usize {
        self.options.n_iterations
    }

    /// Number of features the model was fit with.
    pub fn n_features(&self) -> usize {
        self.weights.nrows()
    }

    /// Feature scaler fitted on the training data.
    pub fn scaler(&self) -> &FittedScaler {
        &self.scaler
    }

    /// Cost after each training iteration.
    pub fn cost_history(&self) -> &CostHistory {
        &self.cost_history
    }

    /// Weights and bias in normalized feature space.
    pub fn coefficients(&self) -> (&Col<f64>, f64) {
        (&self.weights, self.bias)
    }

    /// Weights and bias expressed in the units of the raw features.
    ///
    /// For `w` learned on `(x - mean) / std`, the raw-scale model is
    /// `w_j / std_j` with intercept `b - Σ w_j·mean_j / std_j`.
    pub fn unscaled_coefficients(&self) -> (Col<f64>, f64) {
        let mean = self.scaler.mean();
        let std = self.scaler.std();

        let weights = Col::from_fn(self.n_features(), |j| self.weights[j] / std[j]);
        let mut intercept = self.bias;
        for j in 0..self.n_features() {
            intercept -= weights[j] * mean[j];
        }

        (weights, intercept)
    }
}

impl FittedRegressor for FittedGradientDescent {
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        let x_norm = self.scaler.transform(x)?;
        Ok(predict_linear(&x_norm, &self.weights, self.bias))
    }

    fn weights(&self) -> &Col<f64> {
        &self.weights
    }

    fn bias(&self) -> f64 {
        self.bias
    }
}

/// Builder for `GradientDescentRegressor`.
#[derive(Debug, Clone, Default)]
pub struct GradientDescentRegressorBuilder {
    builder: GradientDescentOptionsBuilder,
}

impl GradientDescentRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.builder = self.builder.learning_rate(learning_rate);
        self
    }

    /// Set the number of training iterations.
    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.builder = self.builder.n_iterations(n_iterations);
        self
    }

    /// Report progress every `every` iterations.
    pub fn report_every(mut self, every: usize) -> Self {
        self.builder = self.builder.report_every(every);
        self
    }

    /// Disable progress reporting.
    pub fn without_progress(mut self) -> Self {
        self.builder = self.builder.without_progress();
        self
    }

    /// Build the regressor, validating its options.
    pub fn build(self) -> Result<GradientDescentRegressor, OptionsError> {
        Ok(GradientDescentRegressor::new(self.builder.build()?))
    }

    /// Build the regressor without validating its options.
    ///
    /// Invalid options are still rejected when `fit` is called.
    pub fn build_unchecked(self) -> GradientDescentRegressor {
        GradientDescentRegressor::new(self.builder.build_unchecked())
    }
}
