//! Preemptive worker threads hammering one sequentially-consistent counter.

use std::sync::atomic::{AtomicI32, Ordering};
use std::thread;

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

pub const WORKER_COUNT: usize = 10;
pub const INCREMENTS_PER_WORKER: i32 = 100_000;

/// Ten workers x 100 000 `SeqCst` increments must sum to exactly 1 000 000.
pub fn check_concurrency() -> ProbeOutcome {
    let total = run_workers(WORKER_COUNT, INCREMENTS_PER_WORKER)?;
    check(
        total == WORKER_COUNT as i32 * INCREMENTS_PER_WORKER,
        ProbeFailure::CounterMismatch,
    )
}

/// Spawn `workers` threads sharing one counter and return the joined total.
pub fn run_workers(workers: usize, increments: i32) -> Result<i32, ProbeFailure> {
    let counter = AtomicI32::new(0);

    thread::scope(|scope| -> Result<(), ProbeFailure> {
        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let counter = &counter;
            let handle = thread::Builder::new()
                .name(format!("stdcheck-worker-{worker}"))
                .spawn_scoped(scope, move || {
                    for _ in 0..increments {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .map_err(|_| ProbeFailure::ThreadCreate)?;
            handles.push(handle);
        }
        for handle in handles {
            handle.join().map_err(|_| ProbeFailure::ThreadJoin)?;
        }
        Ok(())
    })?;

    Ok(counter.load(Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_battery_counts_exactly() {
        assert_eq!(check_concurrency(), Ok(()));
    }

    #[test]
    fn small_run_sums_all_workers() {
        assert_eq!(run_workers(3, 1_000), Ok(3_000));
    }

    #[test]
    fn zero_workers_leave_counter_untouched() {
        assert_eq!(run_workers(0, 1_000), Ok(0));
    }
}
