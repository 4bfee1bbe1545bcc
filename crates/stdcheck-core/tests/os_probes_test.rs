//! Integration test: probes that mutate process-wide state.
//!
//! `setenv`, `fork` and `sigaction` touch state shared by every thread in the
//! test binary, so they run sequentially inside a single test.
//!
//! Run: cargo test -p stdcheck-core --test os_probes_test

#![cfg(unix)]

use stdcheck_core::probes::{env, process, signal};
use stdcheck_core::standard_registry;

#[test]
fn process_wide_probes_pass_in_order() {
    assert_eq!(env::check_env(), Ok(()));
    assert_eq!(
        std::env::var(env::TEST_KEY).as_deref(),
        Ok(env::TEST_VALUE),
        "C_TEST_VAR must stay set after the probe"
    );

    assert_eq!(process::check_process_control(), Ok(()));
    // Forking twice still reaps the right child each time.
    assert_eq!(process::check_process_control(), Ok(()));

    assert_eq!(signal::check_signals(), Ok(()));
    // SIGUSR1 stays ignored, so raising again is harmless.
    assert_eq!(signal::check_signals(), Ok(()));

    let signals = standard_registry()
        .iter()
        .find(|case| case.name == "Signals")
        .expect("Signals case registered");
    assert_eq!(signals.run(), Ok(()));
}
