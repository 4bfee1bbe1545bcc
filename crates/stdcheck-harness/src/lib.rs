//! Harness for the stdcheck probe battery.
//!
//! This crate provides:
//! - [`runner`]: ordered execution, verdict lines, aggregate exit code
//! - [`structured_log`]: JSONL evidence log contract and validation
//! - [`replay`]: rebuild a run's verdict lines from its evidence log
//! - [`config`]: environment-driven logging configuration
//!
//! Binaries: `test_std` (the probe executable) and `stdcheck-log` (log tooling).

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod replay;
pub mod runner;
pub mod structured_log;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use runner::{CaseReport, SuiteRunner, SuiteSummary};
