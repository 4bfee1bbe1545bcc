//! Harness driver.
//!
//! Runs every case of a registry exactly once, in order, on the calling thread,
//! and prints one verdict line per case followed by a summary. Faults inside a
//! probe are not caught: a probe that kills the process ends the run without a
//! summary line.

use std::io::Write;
use std::time::{Duration, Instant};

use stdcheck_core::{Case, ProbeFailure};

use crate::error::HarnessError;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, events};

pub const HEADER_LINE: &str = "Running basic standard library checks...";
pub const FAILURE_SUMMARY: &str = "Some tests failed.";
pub const SUCCESS_SUMMARY: &str = "All basic checks passed!";

/// Result record for one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// 1-based position in the registry.
    pub index: usize,
    pub name: &'static str,
    pub passed: bool,
    /// Success text when passed, failure diagnostic otherwise. Never empty.
    pub message: String,
    pub failure: Option<ProbeFailure>,
    pub duration: Duration,
}

impl CaseReport {
    #[must_use]
    pub fn verdict_line(&self) -> String {
        verdict_line(self.index, self.name, self.passed, &self.message)
    }
}

/// `Test <i> (<name>) passed` or `Test <i> (<name>) failed: <message>`.
#[must_use]
pub fn verdict_line(index: usize, name: &str, passed: bool, message: &str) -> String {
    if passed {
        format!("Test {index} ({name}) passed")
    } else {
        format!("Test {index} ({name}) failed: {message}")
    }
}

/// Lines printed after the last verdict.
#[must_use]
pub fn summary_lines(all_passed: bool) -> &'static [&'static str] {
    if all_passed {
        &["", SUCCESS_SUMMARY]
    } else {
        &[FAILURE_SUMMARY]
    }
}

/// Aggregate of one run.
#[derive(Debug, Clone, Default)]
pub struct SuiteSummary {
    pub reports: Vec<CaseReport>,
}

impl SuiteSummary {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(|r| r.passed)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.passed).count()
    }

    /// 0 iff every case passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }
}

/// Execute one case and build its report.
#[must_use]
pub fn run_case(index: usize, case: &Case) -> CaseReport {
    let start = Instant::now();
    let outcome = case.run();
    let duration = start.elapsed();
    match outcome {
        Ok(()) => CaseReport {
            index,
            name: case.name,
            passed: true,
            message: case.success_message.to_string(),
            failure: None,
            duration,
        },
        Err(failure) => CaseReport {
            index,
            name: case.name,
            passed: false,
            message: failure.to_string(),
            failure: Some(failure),
            duration,
        },
    }
}

/// Drives a registry and optionally mirrors verdicts into an evidence log.
pub struct SuiteRunner<'a> {
    cases: &'a [Case],
    log: Option<LogEmitter>,
}

impl<'a> SuiteRunner<'a> {
    #[must_use]
    pub fn new(cases: &'a [Case]) -> Self {
        Self { cases, log: None }
    }

    /// Attach a structured evidence log.
    #[must_use]
    pub fn with_log(mut self, log: LogEmitter) -> Self {
        self.log = Some(log);
        self
    }

    /// Run every case and write verdict lines to `out`.
    ///
    /// `out` is flushed after every line so that a probe which forks never
    /// hands buffered output to its child.
    pub fn run(&mut self, out: &mut impl Write) -> Result<SuiteSummary, HarnessError> {
        writeln!(out, "{HEADER_LINE}")?;
        out.flush()?;
        self.record(
            LogEntry::new("", LogLevel::Info, events::SUITE_START)
                .with_details(serde_json::json!({ "cases": self.cases.len() })),
        );

        let mut summary = SuiteSummary {
            reports: Vec::with_capacity(self.cases.len()),
        };
        let mut all_passed = true;
        for (i, case) in self.cases.iter().enumerate() {
            let report = run_case(i + 1, case);
            all_passed &= report.passed;

            writeln!(out, "{}", report.verdict_line())?;
            out.flush()?;
            self.record(case_entry(&report));
            summary.reports.push(report);
        }

        for line in summary_lines(all_passed) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        let exit_code = summary.exit_code();
        self.record(
            LogEntry::new(
                "",
                if all_passed { LogLevel::Info } else { LogLevel::Error },
                events::SUITE_END,
            )
            .with_exit_code(i32::from(exit_code))
            .with_details(serde_json::json!({
                "total": summary.reports.len(),
                "failed": summary.failed(),
            })),
        );
        Ok(summary)
    }

    /// Append to the evidence log and flush it, so a run killed by a later
    /// probe keeps every entry recorded so far. The first write error
    /// disables the log.
    fn record(&mut self, entry: LogEntry) {
        let failed = match self.log.as_mut() {
            Some(log) => log.emit_entry(entry).and_then(|_| log.flush()).err(),
            None => None,
        };
        if let Some(err) = failed {
            eprintln!("stdcheck: evidence log disabled: {err}");
            self.log = None;
        }
    }
}

fn case_entry(report: &CaseReport) -> LogEntry {
    let (level, event) = if report.passed {
        (LogLevel::Info, events::CASE_PASS)
    } else {
        (LogLevel::Error, events::CASE_FAIL)
    };
    let entry = LogEntry::new("", level, event)
        .with_case(report.index, report.name)
        .with_outcome(Outcome::from_passed(report.passed))
        .with_message(report.message.as_str())
        .with_duration_us(u64::try_from(report.duration.as_micros()).unwrap_or(u64::MAX));
    match report.failure {
        Some(failure) => entry.with_details(serde_json::json!({ "failure": format!("{failure:?}") })),
        None => entry,
    }
}
