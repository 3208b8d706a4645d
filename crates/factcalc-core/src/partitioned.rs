//! Partitioned factorial: one OS thread per chunk, partial products folded
//! by the caller after every worker has been joined.
//!
//! Workers own their [`Chunk`] and hand back at most one partial product
//! through a channel. Empty chunks send nothing. The channel is only drained
//! after the join barrier, so no partial result is consumed early.

use std::thread;

use tracing::{debug, trace};

use crate::calculator::{validate_n, Calculator, FactError};
use crate::chunk::{self, Chunk};
use crate::constants::{DEFAULT_WORKERS, MAX_WORKERS};

/// Compute n! by splitting `[1, n]` across `workers` threads.
///
/// Exactly `workers` threads are spawned for n > 1, including ones whose
/// chunk is empty. Numerically identical to
/// [`factorial_serial`](crate::serial::factorial_serial) for every n.
pub fn factorial_parallel(n: i64, workers: usize) -> Result<i64, FactError> {
    dispatch(n, workers).map(|(product, _)| product)
}

/// Run the partitioned product, returning it with the number of threads spawned.
#[allow(clippy::cast_sign_loss)]
fn dispatch(n: i64, workers: usize) -> Result<(i64, usize), FactError> {
    validate_n(n)?;
    if workers == 0 {
        return Err(FactError::InvalidArgument("worker count < 1".into()));
    }
    if workers > MAX_WORKERS {
        return Err(FactError::InvalidArgument(format!(
            "worker count {workers} > {MAX_WORKERS}"
        )));
    }
    if n <= 1 {
        return Ok((1, 0));
    }

    let chunks = chunk::plan(n as u64, workers);
    debug!(
        n,
        workers,
        chunk_length = chunks[0].length,
        "dispatching partitioned product"
    );

    let (tx, rx) = crossbeam_channel::unbounded::<i64>();

    let spawned = thread::scope(|scope| -> Result<usize, FactError> {
        let mut handles = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.into_iter().enumerate() {
            let tx = tx.clone();
            let handle = thread::Builder::new()
                .name(format!("factcalc-worker-{index}"))
                .spawn_scoped(scope, move || run_worker(index, chunk, &tx))
                .map_err(|e| FactError::Calculation(format!("failed to spawn worker: {e}")))?;
            handles.push(handle);
        }

        let spawned = handles.len();
        for handle in handles {
            if let Err(payload) = handle.join() {
                std::panic::resume_unwind(payload);
            }
        }
        Ok(spawned)
    })?;

    drop(tx);
    Ok((rx.iter().fold(1i64, i64::wrapping_mul), spawned))
}

fn run_worker(index: usize, chunk: Chunk, tx: &crossbeam_channel::Sender<i64>) {
    match chunk.partial_product() {
        Some(partial) => {
            trace!(index, start = chunk.start, partial, "worker finished");
            // The receiver outlives every worker.
            let _ = tx.send(partial);
        }
        None => trace!(index, start = chunk.start, "empty chunk"),
    }
}

/// Multi-threaded factorial calculator.
#[derive(Debug, Clone, Copy)]
pub struct PartitionedProduct {
    workers: usize,
}

impl PartitionedProduct {
    /// Create a calculator that splits the work across `workers` threads.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Number of worker threads spawned per calculation.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for PartitionedProduct {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl Calculator for PartitionedProduct {
    fn calculate(&self, n: i64) -> Result<i64, FactError> {
        factorial_parallel(n, self.workers)
    }

    fn name(&self) -> &str {
        "Parallel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FACTORIAL_TABLE;
    use crate::serial::factorial_serial;

    #[test]
    fn five_over_four_workers() {
        assert_eq!(factorial_parallel(5, 4), Ok(120));
    }

    #[test]
    fn base_cases_any_worker_count() {
        for workers in [1, 4, 64] {
            assert_eq!(factorial_parallel(0, workers), Ok(1));
            assert_eq!(factorial_parallel(1, workers), Ok(1));
        }
    }

    #[test]
    fn invariant_under_worker_count() {
        for workers in [1, 4, 20] {
            assert_eq!(factorial_parallel(10, workers), Ok(3_628_800));
        }
    }

    #[test]
    fn twenty_fits_exactly() {
        assert_eq!(factorial_parallel(20, 4), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn matches_table() {
        for (n, &expected) in FACTORIAL_TABLE.iter().enumerate() {
            assert_eq!(factorial_parallel(n as i64, 3), Ok(expected), "n={n}");
        }
    }

    #[test]
    fn matches_serial_when_wrapping() {
        for n in 21..80 {
            assert_eq!(factorial_parallel(n, 7), factorial_serial(n), "n={n}");
        }
    }

    #[test]
    fn negative_is_invalid_for_any_worker_count() {
        for workers in [0, 1, 4] {
            assert!(matches!(
                factorial_parallel(-1, workers),
                Err(FactError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn zero_workers_is_invalid() {
        assert_eq!(
            factorial_parallel(5, 0),
            Err(FactError::InvalidArgument("worker count < 1".into()))
        );
    }

    #[test]
    fn spawns_exactly_one_thread_per_worker() {
        assert_eq!(dispatch(5, 4), Ok((120, 4)));
        assert_eq!(dispatch(2, 20), Ok((2, 20)));
        assert_eq!(dispatch(10, 1), Ok((3_628_800, 1)));
    }

    #[test]
    fn spawns_nothing_for_zero_and_one() {
        assert_eq!(dispatch(0, 8), Ok((1, 0)));
        assert_eq!(dispatch(1, 8), Ok((1, 0)));
    }

    #[test]
    fn many_more_workers_than_factors() {
        assert_eq!(dispatch(3, 64), Ok((6, 64)));
    }

    #[test]
    fn too_many_workers_is_invalid() {
        for workers in [MAX_WORKERS + 1, usize::MAX] {
            assert!(matches!(
                factorial_parallel(5, workers),
                Err(FactError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let first = factorial_parallel(17, 5);
        for _ in 0..10 {
            assert_eq!(factorial_parallel(17, 5), first);
        }
    }

    #[test]
    fn calculator_impl() {
        let calc = PartitionedProduct::default();
        assert_eq!(calc.workers(), DEFAULT_WORKERS);
        assert_eq!(calc.name(), "Parallel");
        assert_eq!(calc.calculate(6), Ok(720));
    }
}
