//! Work partitioning for the parallel product.
//!
//! The range `[1, n]` is cut into `workers` contiguous chunks of nominal
//! length `ceil(n / workers)`. Trailing chunks may start past `n`; those
//! contribute nothing to the final product.

use std::ops::RangeInclusive;

/// A contiguous sub-range assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// First factor (1-based).
    pub start: u64,
    /// Nominal chunk length.
    pub length: u64,
    /// Global upper bound (n).
    pub limit: u64,
}

impl Chunk {
    /// Create a chunk.
    #[must_use]
    pub fn new(start: u64, length: u64, limit: u64) -> Self {
        Self {
            start,
            length,
            limit,
        }
    }

    /// Whether the chunk starts past the limit and so has no factors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.limit
    }

    /// The factors this chunk multiplies, or `None` if it is empty.
    ///
    /// The range always includes `start`, then up to `length - 1` further
    /// factors, truncated at `limit`.
    #[must_use]
    pub fn factors(&self) -> Option<RangeInclusive<u64>> {
        if self.is_empty() {
            return None;
        }
        let end = (self.start + self.length.saturating_sub(1)).min(self.limit);
        Some(self.start..=end)
    }

    /// Product of this chunk's factors, or `None` for an empty chunk.
    #[must_use]
    pub fn partial_product(&self) -> Option<i64> {
        self.factors().map(wrapping_product)
    }
}

/// Split `[1, n]` into exactly `workers` chunks.
///
/// Returns an empty plan when `workers` is zero.
#[must_use]
pub fn plan(n: u64, workers: usize) -> Vec<Chunk> {
    if workers == 0 {
        return Vec::new();
    }
    let tn = workers as u64;
    let length = n.div_ceil(tn);
    (0..tn)
        .map(|i| Chunk::new(length * i + 1, length, n))
        .collect()
}

/// Multiply every integer in `range` together in ascending order.
///
/// Uses wrapping 64-bit signed arithmetic: past 20! the result silently
/// wraps, independent of the `overflow-checks` profile setting. An empty
/// range yields 1.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn wrapping_product(range: RangeInclusive<u64>) -> i64 {
    range.fold(1i64, |acc, k| acc.wrapping_mul(k as i64))
}
