//! Calculator trait and error type.
//!
//! `Calculator` is the trait consumed by orchestration. Both the serial and
//! the partitioned product implement it, so the binary can run, time and
//! cross-check them uniformly.

/// Error type for factorial calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactError {
    /// The argument is outside the defined domain (n < 0, zero workers).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different calculators don't match.
    #[error("result mismatch between calculators")]
    Mismatch,
}

/// Public trait for factorial calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate n!.
    ///
    /// Values of n above 20 wrap around in 64-bit signed arithmetic.
    fn calculate(&self, n: i64) -> Result<i64, FactError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Reject negative arguments the same way for every calculator.
pub(crate) fn validate_n(n: i64) -> Result<(), FactError> {
    if n < 0 {
        return Err(FactError::InvalidArgument("n < 0".into()));
    }
    Ok(())
}
