//! Training progress reporting.

use log::debug;

/// Snapshot handed to a progress observer during `fit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingProgress {
    /// 1-based index of the iteration that just completed.
    pub iteration: usize,
    /// Total number of iterations scheduled.
    pub n_iterations: usize,
    /// Cost after this iteration's update.
    pub cost: f64,
}

impl TrainingProgress {
    /// Whether this is the last scheduled iteration.
    pub fn is_final(&self) -> bool {
        self.iteration == self.n_iterations
    }
}

/// Observer used by `Regressor::fit`: emits a `debug` record per report.
pub fn log_progress(progress: &TrainingProgress) {
    debug!(
        "iteration {}/{}, cost: {:.6}",
        progress.iteration, progress.n_iterations, progress.cost
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_final() {
        let p = TrainingProgress {
            iteration: 100,
            n_iterations: 100,
            cost: 0.5,
        };
        assert!(p.is_final());

        let p = TrainingProgress { iteration: 99, ..p };
        assert!(!p.is_final());
    }
}
