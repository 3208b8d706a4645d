//! Application configuration from CLI flags and environment.

use clap::Parser;

use factcalc_core::options::{parse_worker_count, Options};

/// FactCalc-rs: computes n! serially and with a partitioned multi-threaded
/// product, reporting the factorial value and timing of each.
#[derive(Parser, Debug)]
#[command(name = "factcalc", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// Worker threads for the parallel product, at most 1024 (default 4;
    /// unparseable or non-positive values fall back to the default).
    #[arg(value_name = "WORKERS")]
    pub workers: Option<String>,

    /// Factorial argument. Prompted for on stdin when omitted.
    #[arg(short, long, env = "FACTCALC_N")]
    pub n: Option<i64>,

    /// Calculator to run: serial, parallel, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show how the range is split across workers.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options, with the worker count parsed and normalized.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            workers: self.workers.as_deref().map_or(0, parse_worker_count),
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcalc_core::constants::DEFAULT_WORKERS;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("factcalc").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn default_workers_when_absent() {
        assert_eq!(parse(&[]).options().workers, DEFAULT_WORKERS);
    }

    #[test]
    fn explicit_workers() {
        assert_eq!(parse(&["8"]).options().workers, 8);
    }

    #[test]
    fn unparseable_workers_fall_back() {
        assert_eq!(parse(&["lots"]).options().workers, DEFAULT_WORKERS);
        assert_eq!(parse(&["0"]).options().workers, DEFAULT_WORKERS);
        assert_eq!(parse(&["-3"]).options().workers, DEFAULT_WORKERS);
    }

    #[test]
    fn negative_n_is_accepted_by_parser() {
        assert_eq!(parse(&["-n", "-1"]).n, Some(-1));
    }

    #[test]
    fn completion_covers_app_flags() {
        let mut buf = Vec::new();
        factcalc_cli::completion::generate_completion::<AppConfig>(
            clap_complete::Shell::Bash,
            &mut buf,
        );
        let script = String::from_utf8(buf).unwrap();
        for flag in ["--algo", "--details", "--quiet", "--completion"] {
            assert!(script.contains(flag), "missing {flag}");
        }
    }

    #[test]
    fn flags() {
        let config = parse(&["2", "-n", "10", "--algo", "serial", "-q", "-d"]);
        assert_eq!(config.n, Some(10));
        assert_eq!(config.algo, "serial");
        assert!(config.quiet);
        assert!(config.details);
        assert!(!config.verbose);
        assert_eq!(config.options().workers, 2);
    }
}
