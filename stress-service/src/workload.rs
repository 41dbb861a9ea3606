use std::hint::black_box;
use std::time::{Duration, Instant};

/// Runs `length` square roots back to back and returns the wall-clock time taken.
///
/// CPU cost grows linearly with `length`. There is no early exit, so callers
/// should run this off the async workers.
pub fn burn_cpu(length: u64) -> Duration {
    let start = Instant::now();
    for i in 0..length {
        black_box((black_box(i) as f64).sqrt());
    }
    start.elapsed()
}
