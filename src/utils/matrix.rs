//! Matrix utility functions.

use crate::solvers::RegressionError;
use faer::{Col, Mat};
use statrs::statistics::Statistics;

/// Check that `x` and `y` describe the same non-empty set of observations.
pub fn validate_dimensions(x: &Mat<f64>, y: &Col<f64>) -> Result<(), RegressionError> {
    if x.nrows() != y.nrows() {
        return Err(RegressionError::DimensionMismatch {
            x_rows: x.nrows(),
            y_len: y.nrows(),
        });
    }

    if x.nrows() == 0 {
        return Err(RegressionError::InsufficientObservations { needed: 1, got: 0 });
    }

    Ok(())
}

/// Detect columns whose values are all identical to the first row.
///
/// The comparison is exact, so a repeated value such as `0.1` is reported as
/// constant even when a streaming variance over it is not exactly zero.
pub fn detect_constant_columns(x: &Mat<f64>) -> Vec<bool> {
    let n_cols = x.ncols();
    let n_rows = x.nrows();

    if n_rows == 0 {
        return vec![true; n_cols];
    }

    let mut constant = vec![false; n_cols];

    for j in 0..n_cols {
        let first = x[(0, j)];
        constant[j] = (1..n_rows).all(|i| x[(i, j)] == first);
    }

    constant
}

/// Column means and population (ddof = 0) standard deviations.
///
/// Returns NaN statistics for a matrix with no rows.
pub fn column_statistics(x: &Mat<f64>) -> (Col<f64>, Col<f64>) {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let mut means = Col::zeros(n_cols);
    let mut stds = Col::zeros(n_cols);

    for j in 0..n_cols {
        means[j] = (0..n_rows).map(|i| x[(i, j)]).mean();
        stds[j] = (0..n_rows).map(|i| x[(i, j)]).population_std_dev();
    }

    (means, stds)
}

/// Center a vector by subtracting the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let n = y.nrows();
    let mean: f64 = y.iter().sum::<f64>() / n as f64;

    let centered = Col::from_fn(n, |i| y[i] - mean);

    (centered, mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions_ok() {
        let x = Mat::<f64>::zeros(3, 2);
        let y = Col::<f64>::zeros(3);
        assert!(validate_dimensions(&x, &y).is_ok());
    }

    #[test]
    fn test_validate_dimensions_mismatch() {
        let x = Mat::<f64>::zeros(3, 2);
        let y = Col::<f64>::zeros(4);
        assert_eq!(
            validate_dimensions(&x, &y),
            Err(RegressionError::DimensionMismatch { x_rows: 3, y_len: 4 })
        );
    }

    #[test]
    fn test_validate_dimensions_empty() {
        let x = Mat::<f64>::zeros(0, 2);
        let y = Col::<f64>::zeros(0);
        assert!(matches!(
            validate_dimensions(&x, &y),
            Err(RegressionError::InsufficientObservations { .. })
        ));
    }

    #[test]
    fn test_column_statistics() {
        let mut x = Mat::zeros(4, 2);
        for i in 0..4 {
            x[(i, 0)] = (i + 1) as f64; // [1, 2, 3, 4]
            x[(i, 1)] = 7.0;
        }

        let (means, stds) = column_statistics(&x);

        assert!((means[0] - 2.5).abs() < 1e-12);
        assert!((means[1] - 7.0).abs() < 1e-12);
        // population variance of [1, 2, 3, 4] is 1.25
        assert!((stds[0] - 1.25f64.sqrt()).abs() < 1e-12);
        assert_eq!(stds[1], 0.0);
    }

    #[test]
    fn test_detect_constant_columns() {
        let x = Mat::from_fn(10, 3, |i, j| match j {
            0 => 0.1,
            1 => i as f64,
            _ => 2.0,
        });

        let constant = detect_constant_columns(&x);
        assert_eq!(constant, vec![true, false, true]);
    }

    #[test]
    fn test_detect_constant_columns_empty() {
        let x = Mat::<f64>::zeros(0, 3);
        assert_eq!(detect_constant_columns(&x), vec![true; 3]);
    }

    #[test]
    fn test_center_vector() {
        let y = Col::from_fn(4, |i| (i + 1) as f64); // [1, 2, 3, 4]
        let (centered, mean) = center_vector(&y);

        assert!((mean - 2.5).abs() < 1e-10);
        assert!(centered.iter().sum::<f64>().abs() < 1e-10);
    }
}
