//! Native integer and binary64 arithmetic.

use std::hint::black_box;

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

/// Check `i32` add/sub/mul/div/rem and `f64` division, including `1.0 / 0.0`.
pub fn check_arithmetic() -> ProbeOutcome {
    // black_box keeps the operands opaque so the host computes, not rustc.
    let ten: i32 = black_box(10);
    let five: i32 = black_box(5);
    let three: i32 = black_box(3);

    check(ten + five == 15, ProbeFailure::IntegerAddition)?;
    check(ten - five == 5, ProbeFailure::IntegerSubtraction)?;
    check(ten * five == 50, ProbeFailure::IntegerMultiplication)?;
    check(ten / five == 2, ProbeFailure::IntegerDivision)?;
    check(ten % three == 1, ProbeFailure::IntegerModulus)?;

    let a: f64 = black_box(10.0);
    let b: f64 = black_box(5.0);
    check(a / b == 2.0, ProbeFailure::FloatDivision)?;

    let c: f64 = black_box(1.0);
    let d: f64 = black_box(0.0);
    check(c / d == f64::INFINITY, ProbeFailure::DivisionByZeroNotInfinite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_passes_on_host() {
        assert_eq!(check_arithmetic(), Ok(()));
    }
}
