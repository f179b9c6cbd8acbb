//! Squared-error objective for linear models: predictions, cost and gradients.
//!
//! All functions take an already normalized design matrix and assume it has at
//! least one row and `weights.nrows() == x.ncols()`. Callers validate shapes
//! before entering the training loop.

use faer::{Col, Mat};

/// Linear predictions: `X·w + b`, one value per row.
pub fn predict_linear(x: &Mat<f64>, weights: &Col<f64>, bias: f64) -> Col<f64> {
    let n_samples = x.nrows();
    let n_features = x.ncols();

    Col::from_fn(n_samples, |i| {
        let mut pred = bias;
        for j in 0..n_features {
            pred += x[(i, j)] * weights[j];
        }
        pred
    })
}

/// Half mean squared error: `(1 / 2N) · Σ (X·w + b − y)²`.
///
/// The one-half factor cancels against the exponent when differentiating, so
/// [`compute_gradients`] carries no factor of two.
pub fn compute_cost(x: &Mat<f64>, y: &Col<f64>, weights: &Col<f64>, bias: f64) -> f64 {
    let n = y.nrows() as f64;
    let predictions = predict_linear(x, weights, bias);

    let sse: f64 = predictions
        .iter()
        .zip(y.iter())
        .map(|(&p, &yi)| (p - yi).powi(2))
        .sum();

    sse / (2.0 * n)
}

/// Analytic gradient of [`compute_cost`] with respect to weights and bias.
///
/// Returns `(dw, db)` where `dw = (1/N)·Xᵀ·e`, `db = (1/N)·Σ e` and
/// `e = X·w + b − y` are the signed per-row errors.
pub fn compute_gradients(
    x: &Mat<f64>,
    y: &Col<f64>,
    weights: &Col<f64>,
    bias: f64,
) -> (Col<f64>, f64) {
    let n_samples = x.nrows();
    let n_features = x.ncols();
    let n = n_samples as f64;

    let predictions = predict_linear(x, weights, bias);
    let errors = Col::from_fn(n_samples, |i| predictions[i] - y[i]);

    let mut dw = Col::zeros(n_features);
    for j in 0..n_features {
        let mut acc = 0.0;
        for i in 0..n_samples {
            acc += x[(i, j)] * errors[i];
        }
        dw[j] = acc / n;
    }

    let db = errors.iter().sum::<f64>() / n;

    (dw, db)
}
