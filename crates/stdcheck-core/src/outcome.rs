//! Probe outcomes.
//!
//! Every probe returns [`ProbeOutcome`]. The `Display` text of each
//! [`ProbeFailure`] variant is the verdict message printed by the harness;
//! outer build-system tests match on these strings, so they must not change.

use thiserror::Error;

/// Result of a single probe: `Ok(())` when the semantic check held.
pub type ProbeOutcome = Result<(), ProbeFailure>;

/// The first step that failed inside a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ProbeFailure {
    // Arithmetic
    #[error("Integer addition failed")]
    IntegerAddition,
    #[error("Integer subtraction failed")]
    IntegerSubtraction,
    #[error("Integer multiplication failed")]
    IntegerMultiplication,
    #[error("Integer division failed")]
    IntegerDivision,
    #[error("Integer modulus failed")]
    IntegerModulus,
    #[error("Floating point division failed")]
    FloatDivision,
    #[error("Division by zero did not yield infinity")]
    DivisionByZeroNotInfinite,

    // File I/O
    #[error("File creation failed")]
    FileCreate,
    #[error("File write failed")]
    FileWrite,
    #[error("File open failed")]
    FileOpen,
    #[error("File read failed")]
    FileRead,
    #[error("File contents do not match")]
    FileContentsMismatch,
    #[error("File removal failed")]
    FileRemove,

    // Concurrency
    #[error("Thread creation failed")]
    ThreadCreate,
    #[error("Thread join failed")]
    ThreadJoin,
    #[error("Counter value incorrect")]
    CounterMismatch,

    // Memory layout
    #[error("size_of::<int32_t>() failed")]
    SizeOfI32,
    #[error("size_of::<double>() failed")]
    SizeOfF64,
    #[error("align_of::<int32_t>() failed")]
    AlignOfI32,
    #[error("align_of::<double>() failed")]
    AlignOfF64,
    #[error("size_of::<AlignedStruct>() failed")]
    SizeOfAlignedStruct,

    // Time
    #[error("Sleep duration incorrect")]
    SleepTooShort,
    #[error("System time is likely incorrect or too far in the past")]
    WallClockImplausible,

    // Environment
    #[error("Failed to set env var")]
    EnvSet,
    #[error("Failed to get correct environment variable value")]
    EnvReadback,
    #[error("Command line arguments check failed")]
    ArgsMissing,

    // Atomics
    #[error("Atomic increment failed")]
    AtomicIncrement,
    #[error("Atomic decrement failed")]
    AtomicDecrement,

    // Process control
    #[error("Fork failed")]
    Fork,
    #[error("Waitpid failed")]
    Waitpid,
    #[error("Child did not exit normally")]
    ChildAbnormalExit,
    #[error("Child exit status incorrect")]
    ChildExitStatus,

    // Signals
    #[error("Sigaction failed")]
    Sigaction,
    #[error("Raise signal failed")]
    Raise,
}

/// Turn a boolean check into a probe step.
///
/// Used with `?` so the first failed step short-circuits the probe.
#[inline]
pub fn check(condition: bool, failure: ProbeFailure) -> ProbeOutcome {
    if condition { Ok(()) } else { Err(failure) }
}
