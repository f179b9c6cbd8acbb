//! Regression metrics and train/test evaluation.

mod evaluation;

pub use evaluation::{evaluate, EvaluationReport};

use crate::solvers::RegressionError;
use crate::utils::center_vector;
use faer::Col;

fn check_lengths(y: &Col<f64>, predictions: &Col<f64>) -> Result<(), RegressionError> {
    if y.nrows() != predictions.nrows() {
        return Err(RegressionError::LengthMismatch {
            expected: y.nrows(),
            got: predictions.nrows(),
        });
    }
    if y.nrows() == 0 {
        return Err(RegressionError::InsufficientObservations { needed: 1, got: 0 });
    }
    Ok(())
}

/// Mean squared error: `(1/n) Σ (y - ŷ)²`.
pub fn mean_squared_error(y: &Col<f64>, predictions: &Col<f64>) -> Result<f64, RegressionError> {
    check_lengths(y, predictions)?;

    let rss: f64 = y
        .iter()
        .zip(predictions.iter())
        .map(|(&yi, &pi)| (yi - pi).powi(2))
        .sum();

    Ok(rss / y.nrows() as f64)
}

/// Coefficient of determination: `1 - RSS / TSS`.
///
/// Equals 1 for a perfect fit and is negative when the predictions are worse
/// than the mean of `y`.
///
/// # Errors
/// `DegenerateTarget` when all values of `y` are identical (TSS = 0).
pub fn r2_score(y: &Col<f64>, predictions: &Col<f64>) -> Result<f64, RegressionError> {
    check_lengths(y, predictions)?;

    let first = y[0];
    if y.iter().all(|&yi| yi == first) {
        return Err(RegressionError::DegenerateTarget);
    }

    let (centered, _) = center_vector(y);
    let tss: f64 = centered.iter().map(|&c| c.powi(2)).sum();
    if tss == 0.0 {
        return Err(RegressionError::DegenerateTarget);
    }

    let rss: f64 = y
        .iter()
        .zip(predictions.iter())
        .map(|(&yi, &pi)| (yi - pi).powi(2))
        .sum();

    Ok(1.0 - rss / tss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse() {
        let y = Col::from_fn(3, |i| i as f64);
        let p = Col::from_fn(3, |i| i as f64 + 1.0);
        assert!((mean_squared_error(&y, &p).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r2_perfect() {
        let y = Col::from_fn(5, |i| 2.0 * i as f64);
        assert!((r2_score(&y, &y.clone()).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r2_mean_prediction_is_zero() {
        let y = Col::from_fn(4, |i| (i + 1) as f64);
        let p = Col::from_fn(4, |_| 2.5);
        assert!(r2_score(&y, &p).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_r2_can_be_negative() {
        let y = Col::from_fn(4, |i| i as f64);
        let p = Col::from_fn(4, |i| -(i as f64));
        assert!(r2_score(&y, &p).unwrap() < 0.0);
    }

    #[test]
    fn test_r2_degenerate_target() {
        let y = Col::from_fn(4, |_| 0.1);
        let p = Col::from_fn(4, |i| i as f64);
        assert_eq!(r2_score(&y, &p), Err(RegressionError::DegenerateTarget));
    }

    #[test]
    fn test_length_mismatch() {
        let y = Col::<f64>::zeros(3);
        let p = Col::<f64>::zeros(2);
        assert_eq!(
            mean_squared_error(&y, &p),
            Err(RegressionError::LengthMismatch { expected: 3, got: 2 })
        );
    }

    #[test]
    fn test_empty_input() {
        let y = Col::<f64>::zeros(0);
        assert!(matches!(
            r2_score(&y, &y.clone()),
            Err(RegressionError::InsufficientObservations { .. })
        ));
    }
}
