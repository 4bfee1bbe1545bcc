//! The nine probes, one module per facility.
//!
//! Each probe is a plain `fn() -> ProbeOutcome`. The first failed step
//! returns immediately; later steps are not attempted.

pub mod arithmetic;
pub mod atomics;
pub mod concurrency;
pub mod env;
pub mod file_io;
pub mod memory;
pub mod process;
pub mod signal;
pub mod time;
