//! Calculation options and configuration.

use crate::constants::DEFAULT_WORKERS;

/// Options for factorial calculation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of worker threads for the partitioned product.
    pub workers: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.workers == 0 {
            self.workers = DEFAULT_WORKERS;
        }
        self
    }
}

/// Parse a worker count the way C's `atoi` does: optional leading
/// whitespace and sign, then as many digits as are present. Anything
/// unparseable (or negative, or too large) yields 0.
#[must_use]
pub fn parse_worker_count(s: &str) -> usize {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative {
        return 0;
    }
    digits[..end].parse().unwrap_or(0)
}
