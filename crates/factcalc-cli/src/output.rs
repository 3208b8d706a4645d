//! CLI output formatting.

use std::time::Duration;

use factcalc_core::chunk::Chunk;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Elapsed time as whole microseconds.
#[must_use]
pub fn format_micros(d: Duration) -> String {
    format!("{}µs", d.as_micros())
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Describe one worker's share of the range.
#[must_use]
pub fn format_chunk(index: usize, chunk: &Chunk) -> String {
    match chunk.factors() {
        Some(range) if range.start() == range.end() => {
            format!("worker {index}: [{}]", range.start())
        }
        Some(range) => format!("worker {index}: [{}..={}]", range.start(), range.end()),
        None => format!("worker {index}: (empty, starts at {})", chunk.start),
    }
}
