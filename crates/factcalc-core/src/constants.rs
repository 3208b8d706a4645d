//! Constants for factorial calculation and configuration.

/// Default number of partitions (and worker threads) for the parallel product.
pub const DEFAULT_WORKERS: usize = 4;

/// Upper bound on the worker count accepted by the parallel product.
///
/// One OS thread is spawned per worker, so larger requests are rejected
/// before any chunk is planned or thread spawned.
pub const MAX_WORKERS: usize = 1024;

/// Largest n whose factorial fits in an `i64`.
/// 20! = 2432902008176640000
pub const MAX_EXACT_N: i64 = 20;

/// Precomputed factorials for n = 0..=20.
///
/// 21! = 51,090,942,171,709,440,000 exceeds `i64::MAX`
/// (9,223,372,036,854,775,807); beyond this point the products wrap.
pub const FACTORIAL_TABLE: [i64; 21] = {
    let mut table = [1i64; 21];
    let mut i = 2;
    while i < 21 {
        table[i] = table[i - 1] * i as i64;
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (including invalid input).
    pub const ERROR_GENERIC: i32 = 1;
    /// Serial and parallel results did not match.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
