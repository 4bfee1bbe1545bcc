//! Process environment and argument vector.

use std::os::unix::ffi::OsStrExt;

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

pub const TEST_KEY: &str = "C_TEST_VAR";
pub const TEST_VALUE: &str = "c_test_value";

/// Set `C_TEST_VAR=c_test_value` (overwriting), read it back, check `argc >= 1`.
///
/// The variable is intentionally left set.
pub fn check_env() -> ProbeOutcome {
    // SAFETY: both pointers come from NUL-terminated literals. The harness runs
    // probes on one thread, so no other thread reads the environment meanwhile.
    let rc = unsafe { libc::setenv(c"C_TEST_VAR".as_ptr(), c"c_test_value".as_ptr(), 1) };
    check(rc == 0, ProbeFailure::EnvSet)?;

    let readback = std::env::var_os(TEST_KEY);
    check(
        readback.is_some_and(|value| value.as_bytes() == TEST_VALUE.as_bytes()),
        ProbeFailure::EnvReadback,
    )?;

    // Always true under a POSIX launcher; kept as a statement of intent.
    check(std::env::args_os().len() >= 1, ProbeFailure::ArgsMissing)?;
    Ok(())
}
