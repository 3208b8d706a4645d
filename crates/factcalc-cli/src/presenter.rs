//! CLI result presenter.

use std::time::Duration;

use console::style;

use factcalc_core::chunk;
use factcalc_core::constants::MAX_EXACT_N;
use factcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_chunk, format_duration, format_micros, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print how `[1, n]` is split across `workers` threads.
    #[allow(clippy::cast_sign_loss)]
    pub fn present_plan(&self, n: i64, workers: usize) {
        if self.quiet {
            return;
        }
        println!("Workers: {workers}");
        if n <= 1 {
            println!("  (no workers spawned for n <= 1)");
            return;
        }
        for (i, c) in chunk::plan(n as u64, workers).iter().enumerate() {
            println!("  {}", format_chunk(i, c));
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, algorithm: &str, n: i64, result: i64, duration: Duration) {
        if self.quiet {
            println!("{result}");
            return;
        }

        println!("{}: {result}", style(algorithm.to_uppercase()).bold());
        println!("Took: {}", format_micros(duration));

        if self.verbose {
            println!("N: {}", format_number(n));
            println!("Value: {}", format_number(result));
            if n > MAX_EXACT_N {
                println!(
                    "{}",
                    style(format!("{n}! exceeds the i64 range; value wrapped")).yellow()
                );
            }
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                style("ERROR").red()
            } else {
                style("OK").green()
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("{} {error}", style("Error:").red().bold());
    }
}
