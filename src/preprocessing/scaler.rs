//! Z-score feature scaling.
//!
//! Scaling is split across two types. [`StandardScaler`] has no statistics and
//! can only *fit*; [`FittedScaler`] holds the training statistics and can only
//! *transform*. Applying stored statistics before any have been computed is
//! therefore unrepresentable.

use crate::solvers::RegressionError;
use crate::utils::{column_statistics, detect_constant_columns};
use faer::{Col, Mat};

/// Unfitted z-score scaler.
///
/// # Example
///
/// ```rust,ignore
/// use gd_regression::preprocessing::StandardScaler;
///
/// let (scaler, x_train_norm) = StandardScaler::new().fit_transform(&x_train)?;
/// let x_test_norm = scaler.transform(&x_test)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScaler;

impl StandardScaler {
    /// Create a new scaler.
    pub fn new() -> Self {
        Self
    }

    /// Compute per-column mean and standard deviation from `x`.
    ///
    /// A column whose values are all identical has a standard deviation of
    /// zero; it is replaced by 1 and the mean pinned to that value, so the
    /// column maps to all zeros instead of dividing by zero.
    pub fn fit(&self, x: &Mat<f64>) -> Result<FittedScaler, RegressionError> {
        if x.nrows() == 0 {
            return Err(RegressionError::InsufficientObservations { needed: 1, got: 0 });
        }

        let (mut mean, mut std) = column_statistics(x);
        let constant = detect_constant_columns(x);
        for j in 0..std.nrows() {
            if constant[j] {
                mean[j] = x[(0, j)];
                std[j] = 1.0;
            } else if std[j] == 0.0 {
                std[j] = 1.0;
            }
        }

        Ok(FittedScaler { mean, std })
    }

    /// Fit statistics on `x` and return them together with the scaled matrix.
    pub fn fit_transform(&self, x: &Mat<f64>) -> Result<(FittedScaler, Mat<f64>), RegressionError> {
        let fitted = self.fit(x)?;
        let scaled = fitted.apply(x);
        Ok((fitted, scaled))
    }
}

/// Scaler holding statistics computed from training data.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedScaler {
    mean: Col<f64>,
    std: Col<f64>,
}

impl FittedScaler {
    /// Per-feature training means.
    pub fn mean(&self) -> &Col<f64> {
        &self.mean
    }

    /// Per-feature training standard deviations (zeros already replaced by 1).
    pub fn std(&self) -> &Col<f64> {
        &self.std
    }

    /// Number of features seen at fit time.
    pub fn n_features(&self) -> usize {
        self.mean.nrows()
    }

    /// Scale `x` with the stored statistics: `(x - mean) / std`.
    pub fn transform(&self, x: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
        self.check_features(x)?;
        Ok(self.apply(x))
    }

    /// Undo [`transform`](Self::transform): `x_norm * std + mean`.
    pub fn inverse_transform(&self, x_norm: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
        self.check_features(x_norm)?;
        Ok(Mat::from_fn(x_norm.nrows(), x_norm.ncols(), |i, j| {
            x_norm[(i, j)] * self.std[j] + self.mean[j]
        }))
    }

    fn check_features(&self, x: &Mat<f64>) -> Result<(), RegressionError> {
        if x.ncols() != self.n_features() {
            return Err(RegressionError::FeatureMismatch {
                expected: self.n_features(),
                got: x.ncols(),
            });
        }
        Ok(())
    }

    fn apply(&self, x: &Mat<f64>) -> Mat<f64> {
        Mat::from_fn(x.nrows(), x.ncols(), |i, j| {
            (x[(i, j)] - self.mean[j]) / self.std[j]
        })
    }
}
