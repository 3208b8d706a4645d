//! Application entry point and dispatch.

use std::io;

use anyhow::Result;
use tracing::warn;

use factcalc_cli::presenter::CLIResultPresenter;
use factcalc_cli::prompt::read_n;
use factcalc_core::constants::MAX_EXACT_N;
use factcalc_core::registry::DefaultFactory;
use factcalc_orchestration::calculator_selection::get_calculators_to_run;
use factcalc_orchestration::interfaces::ResultPresenter;
use factcalc_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        factcalc_cli::completion::generate_completion::<AppConfig>(shell, &mut io::stdout());
        return Ok(());
    }

    let opts = config.options();
    let factory = DefaultFactory::new(opts.clone());
    let calculators = get_calculators_to_run(&config.algo, &factory)?;

    let n = match config.n {
        Some(n) => n,
        None => read_n_from_stdin(config.quiet)?,
    };

    if n > MAX_EXACT_N {
        warn!(n, max = MAX_EXACT_N, "n! exceeds the i64 range; results will wrap");
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    if config.details {
        presenter.present_plan(n, opts.workers);
    }

    let results = execute_calculations(&calculators, n);

    // Invalid input halts before anything is presented
    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone().into());
    }

    if results.len() > 1 {
        let comparison = analyze_comparison_results(&results);
        debug_assert!(
            comparison.is_ok(),
            "serial and parallel results disagree: {results:?}"
        );
        comparison?;
    }

    for result in &results {
        if let Some(value) = result.value() {
            presenter.present_result(&result.algorithm, n, value, result.duration);
        }
    }

    if results.len() > 1 && config.verbose {
        presenter.present_comparison(&results);
    }

    Ok(())
}

fn read_n_from_stdin(quiet: bool) -> Result<i64> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let n = if quiet {
        read_n(&mut input, &mut io::sink())?
    } else {
        read_n(&mut input, &mut io::stdout())?
    };
    Ok(n)
}
