//! Gradient descent options and configuration.

use thiserror::Error;

/// Configuration options for gradient descent training.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescentOptions {
    /// Step size applied to every gradient update (default: 0.01).
    pub learning_rate: f64,
    /// Exact number of update steps performed by `fit` (default: 1000).
    pub n_iterations: usize,
    /// Report progress every this many iterations; `None` disables reporting (default: 100).
    pub report_every: Option<usize>,
}

impl Default for GradientDescentOptions {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            n_iterations: 1000,
            report_every: Some(100),
        }
    }
}

/// Errors that can occur when validating gradient descent options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("learning_rate must be finite and non-negative, got {0}")]
    InvalidLearningRate(f64),
    #[error("n_iterations must be at least 1, got {0}")]
    InvalidIterations(usize),
    #[error("report_every must be at least 1, got {0}")]
    InvalidReportInterval(usize),
}

impl GradientDescentOptions {
    /// Create a new builder for gradient descent options.
    pub fn builder() -> GradientDescentOptionsBuilder {
        GradientDescentOptionsBuilder::default()
    }

    /// Create options with the given learning rate and iteration count.
    pub fn new(learning_rate: f64, n_iterations: usize) -> Self {
        Self {
            learning_rate,
            n_iterations,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    ///
    /// A learning rate of zero is accepted: training then leaves every
    /// parameter at its initial value.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(OptionsError::InvalidLearningRate(self.learning_rate));
        }
        if self.n_iterations < 1 {
            return Err(OptionsError::InvalidIterations(self.n_iterations));
        }
        if let Some(every) = self.report_every {
            if every < 1 {
                return Err(OptionsError::InvalidReportInterval(every));
            }
        }
        Ok(())
    }
}

/// Builder for `GradientDescentOptions`.
#[derive(Debug, Clone, Default)]
pub struct GradientDescentOptionsBuilder {
    options: GradientDescentOptions,
}

impl GradientDescentOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.options.learning_rate = learning_rate;
        self
    }

    /// Set the number of training iterations.
    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.options.n_iterations = n_iterations;
        self
    }

    /// Report progress every `every` iterations.
    pub fn report_every(mut self, every: usize) -> Self {
        self.options.report_every = Some(every);
        self
    }

    /// Disable progress reporting.
    pub fn without_progress(mut self) -> Self {
        self.options.report_every = None;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<GradientDescentOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> GradientDescentOptions {
        self.options
    }
}
