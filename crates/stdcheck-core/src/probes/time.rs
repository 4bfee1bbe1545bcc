//! Monotonic sleep accuracy and wall-clock plausibility.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

pub const SLEEP_MICROS: u64 = 50_000;
pub const MIN_ELAPSED_MILLIS: u128 = 50;
/// Earliest plausible wall clock (November 2023).
pub const MIN_EPOCH_SECS: u64 = 1_700_000_000;

pub fn check_time() -> ProbeOutcome {
    let start = Instant::now();
    thread::sleep(Duration::from_micros(SLEEP_MICROS));
    let elapsed = start.elapsed();
    check(sleep_long_enough(elapsed), ProbeFailure::SleepTooShort)?;

    check(
        wall_clock_plausible(SystemTime::now()),
        ProbeFailure::WallClockImplausible,
    )?;
    Ok(())
}

/// Whole elapsed milliseconds must reach the requested sleep.
#[must_use]
pub fn sleep_long_enough(elapsed: Duration) -> bool {
    elapsed.as_millis() >= MIN_ELAPSED_MILLIS
}

/// A clock set before the epoch is as implausible as one stuck at it.
#[must_use]
pub fn wall_clock_plausible(now: SystemTime) -> bool {
    now.duration_since(UNIX_EPOCH)
        .is_ok_and(|since| since.as_secs() >= MIN_EPOCH_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_clocks_pass() {
        assert_eq!(check_time(), Ok(()));
    }

    #[test]
    fn short_sleep_is_rejected() {
        assert!(!sleep_long_enough(Duration::from_millis(30)));
        assert!(!sleep_long_enough(Duration::from_micros(49_999)));
        assert!(sleep_long_enough(Duration::from_millis(50)));
    }

    #[test]
    fn epoch_zero_is_implausible() {
        assert!(!wall_clock_plausible(UNIX_EPOCH));
        assert!(!wall_clock_plausible(
            UNIX_EPOCH + Duration::from_secs(MIN_EPOCH_SECS - 1)
        ));
        assert!(wall_clock_plausible(
            UNIX_EPOCH + Duration::from_secs(MIN_EPOCH_SECS)
        ));
    }
}
