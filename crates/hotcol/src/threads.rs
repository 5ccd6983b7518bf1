//! # Thread Utilities

use std::thread;

#[cfg(feature = "rayon")]
use core::str::FromStr;
#[cfg(feature = "rayon")]
use std::env;

/// Row-chunk floor for transform fan-out.
///
/// Chunks below this size cost more in scheduling than they win back.
const MIN_CHUNK_ROWS: usize = 512;

/// Get the max parallelism available.
pub fn est_max_parallelism() -> usize {
    let default = || {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    };

    #[cfg(feature = "rayon")]
    {
        match env::var("RAYON_NUM_THREADS")
            .ok()
            .and_then(|s| usize::from_str(&s).ok())
        {
            Some(x @ 1..) => x,
            _ => default(),
        }
    }

    #[cfg(not(feature = "rayon"))]
    default()
}

/// Resolve a configured worker count.
///
/// `0` means all available hardware parallelism.
pub fn resolve_thread_count(thread_count: usize) -> usize {
    match thread_count {
        0 => est_max_parallelism(),
        n => n,
    }
}

/// The row-chunk size for fanning `n_rows` out over `workers`.
///
/// Aims for a few chunks per worker, with a floor so tiny chunks never
/// dominate scheduling cost.
pub fn chunk_rows(
    n_rows: usize,
    workers: usize,
) -> usize {
    let target = n_rows.div_ceil(workers.max(1) * 4);
    target.max(MIN_CHUNK_ROWS).min(n_rows.max(1))
}
