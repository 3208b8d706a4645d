//! # factcalc-core
//!
//! Core library for FactCalc-rs. Computes n! serially and with a
//! partitioned, multi-threaded product, both in wrapping 64-bit arithmetic.

pub mod calculator;
pub mod chunk;
pub mod constants;
pub mod options;
pub mod partitioned;
pub mod registry;
pub mod serial;

// Re-exports
pub use calculator::{Calculator, FactError};
pub use chunk::Chunk;
pub use constants::{exit_codes, DEFAULT_WORKERS, FACTORIAL_TABLE, MAX_EXACT_N, MAX_WORKERS};
pub use options::Options;
pub use partitioned::{factorial_parallel, PartitionedProduct};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use serial::{factorial_serial, SerialProduct};

/// Compute n! with the partitioned product and the default worker count.
///
/// For explicit worker counts use [`factorial_parallel`] or the
/// [`Calculator`] trait.
///
/// # Example
/// ```
/// assert_eq!(factcalc_core::factorial(5).unwrap(), 120);
/// assert!(factcalc_core::factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<i64, FactError> {
    factorial_parallel(n, DEFAULT_WORKERS)
}
