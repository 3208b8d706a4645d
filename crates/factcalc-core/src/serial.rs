//! Straight-line serial factorial.

use crate::calculator::{validate_n, Calculator, FactError};
use crate::chunk::wrapping_product;

/// Compute n! by multiplying 2, 3, ..., n in ascending order.
///
/// Wraps silently for n > 20.
#[allow(clippy::cast_sign_loss)]
pub fn factorial_serial(n: i64) -> Result<i64, FactError> {
    validate_n(n)?;
    if n <= 1 {
        return Ok(1);
    }
    Ok(wrapping_product(2..=n as u64))
}

/// Single-threaded factorial calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialProduct;

impl SerialProduct {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for SerialProduct {
    fn calculate(&self, n: i64) -> Result<i64, FactError> {
        factorial_serial(n)
    }

    fn name(&self) -> &str {
        "Serial"
    }
}
