//! # House Price Regression with Gradient Descent
//!
//! Trains a gradient descent linear regression on a synthetic housing dataset
//! and reports train/test error, then walks through gradient descent on the
//! one-dimensional function f(x) = x².
//!
//! ## Key Features
//! - Progress logged every 100 iterations (set `RUST_LOG` to change the level)
//! - Fixed 80/20 holdout split
//! - Coefficients reported in both normalized and raw feature units
//!
//! Run with: `cargo run --example housing`

use faer::{Col, Mat};
use gd_regression::prelude::*;

const FEATURE_NAMES: [&str; 4] = ["MedInc", "HouseAge", "AveRooms", "Latitude"];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("=== House Price Predictor: Gradient Descent ===\n");

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    demonstrate_gradient_descent();
}

fn run() -> Result<(), RegressionError> {
    let (x, y) = synthetic_housing(1000, 42);
    println!("Samples: {}, Features: {}", x.nrows(), x.ncols());

    let n_train = x.nrows() * 4 / 5;
    let (x_train, x_test, y_train, y_test) = holdout(&x, &y, n_train);
    println!("Training samples: {}", x_train.nrows());
    println!("Testing samples:  {}\n", x_test.nrows());

    println!("--- Training ---\n");
    let fitted = GradientDescentRegressor::builder()
        .learning_rate(0.1)
        .n_iterations(1000)
        .report_every(100)
        .build()?
        .fit(&x_train, &y_train)?;

    let history = fitted.cost_history();
    println!(
        "Cost: {:.6} -> {:.6} over {} iterations\n",
        history.initial().unwrap_or(f64::NAN),
        history.last().unwrap_or(f64::NAN),
        history.len()
    );

    println!("--- Evaluation ---\n");
    let report = evaluate(&fitted, &x_train, &x_test, &y_train, &y_test)?;
    println!("{report}\n");

    println!("--- Coefficients ---\n");
    let (raw_weights, raw_intercept) = fitted.unscaled_coefficients();
    println!("{:<10} {:>12} {:>12}", "Feature", "Normalized", "Raw");
    for (j, name) in FEATURE_NAMES.iter().enumerate() {
        println!(
            "{:<10} {:>12.4} {:>12.4}",
            name,
            fitted.weights()[j],
            raw_weights[j]
        );
    }
    println!(
        "{:<10} {:>12.4} {:>12.4}\n",
        "Intercept",
        fitted.bias(),
        raw_intercept
    );

    Ok(())
}

/// Minimize f(x) = x² from x = 10 with a fixed step of 0.1.
fn demonstrate_gradient_descent() {
    println!("=== Gradient Descent on f(x) = x² ===\n");
    println!("Derivative: f'(x) = 2x");

    let mut x: f64 = 10.0;
    let learning_rate = 0.1;
    println!("Starting at x = {x}\n");

    for step in 1..=10 {
        let gradient = 2.0 * x;
        x -= learning_rate * gradient;
        println!("Step {step}: x = {x:.6}, f(x) = {:.6}", x * x);
    }

    println!("\nConverged to x ≈ {x:.6} (true minimum is x = 0)");
}

/// Price in $100,000s driven mostly by income, with small age/rooms/latitude effects.
fn synthetic_housing(n_samples: usize, seed: u64) -> (Mat<f64>, Col<f64>) {
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64)
    };

    let mut x = Mat::zeros(n_samples, FEATURE_NAMES.len());
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let income = 0.5 + 14.5 * next();
        let age = 1.0 + 51.0 * next();
        let rooms = 2.0 + 6.0 * next();
        let latitude = 32.5 + 9.5 * next();
        let noise = (next() - 0.5) * 0.6;

        x[(i, 0)] = income;
        x[(i, 1)] = age;
        x[(i, 2)] = rooms;
        x[(i, 3)] = latitude;
        y[i] = 0.45 * income + 0.01 * age - 0.05 * rooms - 0.08 * latitude + 3.0 + noise;
    }

    (x, y)
}

fn holdout(
    x: &Mat<f64>,
    y: &Col<f64>,
    n_train: usize,
) -> (Mat<f64>, Mat<f64>, Col<f64>, Col<f64>) {
    let n_test = x.nrows() - n_train;
    (
        Mat::from_fn(n_train, x.ncols(), |i, j| x[(i, j)]),
        Mat::from_fn(n_test, x.ncols(), |i, j| x[(i + n_train, j)]),
        Col::from_fn(n_train, |i| y[i]),
        Col::from_fn(n_test, |i| y[i + n_train]),
    )
}
