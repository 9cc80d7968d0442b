//! Runs a scanner over a range, split across a bounded worker pool.
//!
//! With parallelism disabled, or when only one worker or one non-empty chunk
//! is available, the scanner runs once over the whole range on the calling
//! thread. Otherwise the range is partitioned and each non-empty chunk is
//! scanned by a fresh scanner pass on a dedicated rayon pool. Results are
//! concatenated in chunk order once every chunk has finished.
//!
//! Chunk passes start from empty state, which shifts results at chunk starts
//! in parallel mode:
//!
//! - a retrograde edge whose detection depends on the sample just before a
//!   chunk start is not reported;
//! - a chunk starting inside the first whole degree of a sector reports an
//!   entry into that sector again, even when the previous chunk already
//!   reported it.

use std::time::Instant;

use gochara_ephem::EphemerisOracle;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::cancel::CancellationToken;
use crate::config::ScanConfig;
use crate::error::SearchError;
use crate::partition::partition;
use crate::scanner::Scanner;

/// Run `scanner` with a fresh cancellation token.
pub fn run<S: Scanner>(
    scanner: &S,
    config: &ScanConfig,
    oracle: &dyn EphemerisOracle,
) -> Result<Vec<S::Event>, SearchError> {
    run_with_cancel(scanner, config, oracle, &CancellationToken::new())
}

/// Run `scanner`, stopping early once `cancel` fires.
///
/// Uses `min(cpus, max_workers)` workers, or one when parallelism is off.
pub fn run_with_cancel<S: Scanner>(
    scanner: &S,
    config: &ScanConfig,
    oracle: &dyn EphemerisOracle,
    cancel: &CancellationToken,
) -> Result<Vec<S::Event>, SearchError> {
    run_on_workers(scanner, config, oracle, cancel, config.parallel.worker_count())
}

/// Run `scanner` split over exactly `workers` chunks.
///
/// The first chunk error in chunk order is returned, ignoring `Cancelled`
/// results from chunks stopped because a sibling failed. No partial results
/// are returned on error.
pub fn run_on_workers<S: Scanner>(
    scanner: &S,
    config: &ScanConfig,
    oracle: &dyn EphemerisOracle,
    cancel: &CancellationToken,
    workers: usize,
) -> Result<Vec<S::Event>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    scanner.validate()?;

    let started = Instant::now();
    let events = if workers <= 1 {
        debug!(scanner = scanner.name(), "sequential scan");
        scanner.scan(&config.range, config.step, oracle, cancel)?
    } else {
        let chunks: Vec<_> = partition(&config.range, config.step, workers)?
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect();
        if chunks.len() <= 1 {
            debug!(scanner = scanner.name(), "single chunk, sequential scan");
            scanner.scan(&config.range, config.step, oracle, cancel)?
        } else {
            info!(
                scanner = scanner.name(),
                workers,
                chunks = chunks.len(),
                "parallel scan"
            );
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .thread_name(|i| format!("gochara-scan-{i}"))
                .build()
                .map_err(|e| SearchError::WorkerPool(e.to_string()))?;

            let siblings = cancel.child_token();
            let results: Vec<Result<Vec<S::Event>, SearchError>> = pool.install(|| {
                chunks
                    .par_iter()
                    .enumerate()
                    .map(|(i, chunk)| {
                        debug!(chunk = i, start = %chunk.start, "chunk started");
                        let result = scanner.scan(chunk, config.step, oracle, &siblings);
                        match &result {
                            Ok(found) => debug!(chunk = i, found = found.len(), "chunk finished"),
                            Err(e) => {
                                debug!(chunk = i, error = %e, "chunk failed");
                                siblings.cancel();
                            }
                        }
                        result
                    })
                    .collect()
            });
            merge_chunks(results)?
        }
    };

    info!(
        scanner = scanner.name(),
        found = events.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scan complete"
    );
    Ok(events)
}

/// Concatenate chunk results in order, or surface the first real failure.
fn merge_chunks<E>(results: Vec<Result<Vec<E>, SearchError>>) -> Result<Vec<E>, SearchError> {
    let mut events = Vec::new();
    let mut cancelled = false;
    for result in results {
        match result {
            Ok(found) => events.extend(found),
            Err(SearchError::Cancelled) => cancelled = true,
            Err(e) => return Err(e),
        }
    }
    if cancelled {
        return Err(SearchError::Cancelled);
    }
    Ok(events)
}
