//! The fixed, ordered probe registry.

use crate::outcome::ProbeOutcome;
use crate::probes;

/// Signature shared by every probe.
pub type ProbeFn = fn() -> ProbeOutcome;

/// A named probe.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    /// Category name shown in verdict lines.
    pub name: &'static str,
    /// The check itself.
    pub probe: ProbeFn,
    /// Diagnostic recorded when the probe passes.
    pub success_message: &'static str,
}

impl Case {
    /// Run the probe once.
    pub fn run(&self) -> ProbeOutcome {
        (self.probe)()
    }
}

static STANDARD_REGISTRY: [Case; 9] = [
    Case {
        name: "Arithmetic",
        probe: probes::arithmetic::check_arithmetic,
        success_message: "Arithmetic tests passed",
    },
    Case {
        name: "File I/O",
        probe: probes::file_io::check_file_io,
        success_message: "File I/O tests passed",
    },
    Case {
        name: "Concurrency",
        probe: probes::concurrency::check_concurrency,
        success_message: "Concurrency tests passed",
    },
    Case {
        name: "Memory",
        probe: probes::memory::check_memory,
        success_message: "Memory tests passed",
    },
    Case {
        name: "Time",
        probe: probes::time::check_time,
        success_message: "Time tests passed",
    },
    Case {
        name: "Environment Variables and Args",
        probe: probes::env::check_env,
        success_message: "Environment tests passed",
    },
    Case {
        name: "Atomics",
        probe: probes::atomics::check_atomic,
        success_message: "Atomic tests passed",
    },
    Case {
        name: "Process Control",
        probe: probes::process::check_process_control,
        success_message: "Process control tests passed",
    },
    Case {
        name: "Signals",
        probe: probes::signal::check_signals,
        success_message: "Signal handling tests passed",
    },
];

/// The battery run by `test_std`, in reporting order.
///
/// Later probes may observe side effects of earlier ones (`C_TEST_VAR` set,
/// `SIGUSR1` ignored), so the order is part of the contract.
#[must_use]
pub fn standard_registry() -> &'static [Case] {
    &STANDARD_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_is_fixed() {
        let names: Vec<&str> = standard_registry().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "Arithmetic",
                "File I/O",
                "Concurrency",
                "Memory",
                "Time",
                "Environment Variables and Args",
                "Atomics",
                "Process Control",
                "Signals",
            ]
        );
    }

    #[test]
    fn every_case_has_names_and_success_text() {
        assert!(!standard_registry().is_empty());
        for case in standard_registry() {
            assert!(!case.name.is_empty());
            assert!(!case.success_message.is_empty(), "{}", case.name);
        }
    }
}
