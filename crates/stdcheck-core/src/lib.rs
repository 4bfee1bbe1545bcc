//! Standard-library and OS facility probes for freshly built base images.
//!
//! This crate provides:
//! - [`ProbeFailure`]: one variant per failing step, with stable diagnostic text
//! - [`Case`]: a named probe plus its success diagnostic
//! - [`standard_registry`]: the fixed, ordered battery of nine probes
//! - [`probes`]: the probes themselves (arithmetic through signal delivery)
//!
//! The probes talk to the host through `std` where it maps one-to-one onto the
//! facility under test, and through `libc` for `setenv`, `fork`/`waitpid` and
//! `sigaction`/`raise`.

pub mod outcome;
pub mod probes;
pub mod registry;

pub use outcome::{ProbeFailure, ProbeOutcome, check};
pub use registry::{Case, standard_registry};
