//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};

/// Deterministic LCG in [-1, 1) so test data is reproducible without `rand`.
fn next_rand(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
}

/// Generate simple linear data: y = x * beta + intercept + noise,
/// with beta_j = j + 1.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    let coefficients: Vec<f64> = (0..n_features).map(|j| (j + 1) as f64).collect();
    let (x, y) = generate_data_with(n_samples, &coefficients, intercept, noise_std, seed);
    let true_coefficients = Col::from_fn(n_features, |j| coefficients[j]);
    (x, y, true_coefficients)
}

/// Generate linear data with explicit coefficients.
///
/// Feature `j` is drawn from [-1, 1) and scaled by `j + 1`, so columns have
/// different magnitudes.
pub fn generate_data_with(
    n_samples: usize,
    coefficients: &[f64],
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>) {
    let mut rng_state = seed;
    let n_features = coefficients.len();

    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = next_rand(&mut rng_state) * (j + 1) as f64 * 10.0;
            yi += x[(i, j)] * coefficients[j];
        }
        yi += noise_std * next_rand(&mut rng_state);
        y[i] = yi;
    }

    (x, y)
}

/// Generate data with a constant middle column: y = 1 + 2*x0 + 3*x2.
pub fn generate_constant_column_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    generate_constant_column_data_with(n_samples, 5.0)
}

/// Same as [`generate_constant_column_data`] with the middle column set to `value`.
pub fn generate_constant_column_data_with(n_samples: usize, value: f64) -> (Mat<f64>, Col<f64>) {
    let mut x = Mat::zeros(n_samples, 3);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = i as f64;
        x[(i, 1)] = value; // Constant column
        x[(i, 2)] = ((i * 7) % 5) as f64;
        y[i] = 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 2)];
    }

    (x, y)
}

/// X = [[1], [2], [3], [4]], y = 2x.
pub fn doubling_data() -> (Mat<f64>, Col<f64>) {
    let x = Mat::from_fn(4, 1, |i, _| (i + 1) as f64);
    let y = Col::from_fn(4, |i| 2.0 * (i + 1) as f64);
    (x, y)
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
