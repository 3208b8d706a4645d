//! Core orchestration: timed execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use factcalc_core::calculator::{Calculator, FactError};

use crate::interfaces::CalculationResult;

/// Execute calculations with all given calculators.
///
/// Calculators run one after another, each timed in isolation.
pub fn execute_calculations(calculators: &[Arc<dyn Calculator>], n: i64) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|calc| {
            let start = Instant::now();
            let outcome = calc.calculate(n);
            let duration = start.elapsed();
            match &outcome {
                Ok(value) => info!(algorithm = calc.name(), n, value, ?duration, "calculation done"),
                Err(e) => debug!(algorithm = calc.name(), n, error = %e, "calculation failed"),
            }
            CalculationResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Failed outcomes are ignored; every successful value must equal the first.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FactError> {
    let mut values = results.iter().filter_map(CalculationResult::value);

    let Some(first) = values.next() else {
        return Err(FactError::Calculation("no valid results".into()));
    };

    if values.any(|v| v != first) {
        return Err(FactError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use factcalc_core::partitioned::PartitionedProduct;
    use factcalc_core::serial::SerialProduct;

    fn ok(algorithm: &str, value: i64) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome: Ok(value),
            duration: Duration::from_micros(1),
        }
    }

    fn failed(algorithm: &str) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome: Err(FactError::InvalidArgument("n < 0".into())),
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn execute_single_calculator() {
        let calc: Arc<dyn Calculator> = Arc::new(SerialProduct::new());
        let results = execute_calculations(&[calc], 20);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "Serial");
        assert_eq!(results[0].value(), Some(2_432_902_008_176_640_000));
    }

    #[test]
    fn execute_serial_and_parallel() {
        let serial: Arc<dyn Calculator> = Arc::new(SerialProduct::new());
        let parallel: Arc<dyn Calculator> = Arc::new(PartitionedProduct::new(4));
        let results = execute_calculations(&[serial, parallel], 12);
        assert_eq!(results.len(), 2);
        for r in &results {
            assert_eq!(r.value(), Some(479_001_600), "{} failed", r.algorithm);
        }
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn execute_negative_reports_errors() {
        let serial: Arc<dyn Calculator> = Arc::new(SerialProduct::new());
        let parallel: Arc<dyn Calculator> = Arc::new(PartitionedProduct::new(4));
        let results = execute_calculations(&[serial, parallel], -3);
        assert!(results
            .iter()
            .all(|r| matches!(r.outcome, Err(FactError::InvalidArgument(_)))));
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(FactError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![ok("A", 120), ok("B", 120)];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("A", 120), ok("B", 121)];
        assert_eq!(
            analyze_comparison_results(&results),
            Err(FactError::Mismatch)
        );
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(FactError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_single_valid_result() {
        assert!(analyze_comparison_results(&[ok("A", 1)]).is_ok());
    }

    #[test]
    fn analyze_ignores_error_entries() {
        let results = vec![ok("A", 720), failed("B"), ok("C", 720)];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let results = vec![ok("A", 720), ok("B", 720), ok("C", 721)];
        assert_eq!(
            analyze_comparison_results(&results),
            Err(FactError::Mismatch)
        );
    }
}
