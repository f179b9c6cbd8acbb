//! Per-iteration cost record.

/// Ordered sequence of training costs, one entry per iteration.
///
/// Entry `i` holds the cost evaluated with the parameters produced by
/// iteration `i + 1`. The history is diagnostic only and never feeds back
/// into training.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostHistory {
    costs: Vec<f64>,
}

impl CostHistory {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self { costs: Vec::new() }
    }

    /// Create an empty history with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            costs: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, cost: f64) {
        self.costs.push(cost);
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether no iteration has been recorded.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Costs in iteration order.
    pub fn as_slice(&self) -> &[f64] {
        &self.costs
    }

    /// Iterate over the costs in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.costs.iter()
    }

    /// Cost after the first iteration.
    pub fn initial(&self) -> Option<f64> {
        self.costs.first().copied()
    }

    /// Cost after the last iteration.
    pub fn last(&self) -> Option<f64> {
        self.costs.last().copied()
    }

    /// Total decrease from the first to the last recorded cost.
    pub fn improvement(&self) -> Option<f64> {
        Some(self.initial()? - self.last()?)
    }

    /// Check that no cost exceeds its predecessor by more than `tolerance`.
    pub fn is_non_increasing(&self, tolerance: f64) -> bool {
        self.costs.windows(2).all(|w| w[1] <= w[0] + tolerance)
    }
}

impl AsRef<[f64]> for CostHistory {
    fn as_ref(&self) -> &[f64] {
        &self.costs
    }
}

impl<'a> IntoIterator for &'a CostHistory {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.costs.iter()
    }
}
