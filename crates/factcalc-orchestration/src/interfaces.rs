//! Orchestration interfaces.

use std::time::Duration;

use factcalc_core::calculator::FactError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(&self, algorithm: &str, n: i64, result: i64, duration: Duration);

    /// Present a comparison of all results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<i64, FactError>,
    /// Wall-clock computation time.
    pub duration: Duration,
}

impl CalculationResult {
    /// The computed value, if the calculation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        self.outcome.as_ref().ok().copied()
    }
}
