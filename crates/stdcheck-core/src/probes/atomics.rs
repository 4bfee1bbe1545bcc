//! Stand-alone atomic fetch-add / fetch-sub.

use std::sync::atomic::{AtomicI32, Ordering};

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

pub fn check_atomic() -> ProbeOutcome {
    let counter = AtomicI32::new(0);

    counter.fetch_add(1, Ordering::SeqCst);
    check(
        counter.load(Ordering::SeqCst) == 1,
        ProbeFailure::AtomicIncrement,
    )?;

    counter.fetch_sub(1, Ordering::SeqCst);
    check(
        counter.load(Ordering::SeqCst) == 0,
        ProbeFailure::AtomicDecrement,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_then_decrement_returns_to_zero() {
        assert_eq!(check_atomic(), Ok(()));
    }
}
