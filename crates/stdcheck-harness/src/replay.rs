//! Rebuild stdout of a past run from its evidence log.

use crate::runner::{summary_lines, verdict_line};
use crate::structured_log::{LogEntry, Outcome, events};

/// Verdict lines for every case event, then the summary if the run finished.
///
/// A log without `suite_end` belongs to a run that was killed mid-way; its
/// replay stops after the last recorded verdict, exactly like its stdout.
#[must_use]
pub fn replay_verdicts(entries: &[LogEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in entries {
        match entry.event.as_str() {
            events::CASE_PASS | events::CASE_FAIL => {
                let passed = entry.outcome == Some(Outcome::Pass);
                lines.push(verdict_line(
                    entry.case_index.unwrap_or_default(),
                    entry.case.as_deref().unwrap_or_default(),
                    passed,
                    entry.message.as_deref().unwrap_or_default(),
                ));
            }
            events::SUITE_END => {
                let all_passed = entry.exit_code == Some(0);
                lines.extend(summary_lines(all_passed).iter().map(|l| (*l).to_string()));
            }
            _ => {}
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured_log::LogLevel;

    fn case(index: usize, name: &str, outcome: Outcome, message: &str) -> LogEntry {
        let event = match outcome {
            Outcome::Pass => events::CASE_PASS,
            Outcome::Fail => events::CASE_FAIL,
        };
        LogEntry::new("stdcheck::r::001", LogLevel::Info, event)
            .with_case(index, name)
            .with_outcome(outcome)
            .with_message(message)
    }

    #[test]
    fn finished_failing_run_replays_summary() {
        let entries = vec![
            LogEntry::new("stdcheck::r::000", LogLevel::Info, events::SUITE_START),
            case(1, "Arithmetic", Outcome::Pass, "Arithmetic tests passed"),
            case(2, "File I/O", Outcome::Fail, "File creation failed"),
            LogEntry::new("stdcheck::r::003", LogLevel::Error, events::SUITE_END).with_exit_code(1),
        ];
        assert_eq!(
            replay_verdicts(&entries),
            [
                "Test 1 (Arithmetic) passed",
                "Test 2 (File I/O) failed: File creation failed",
                "Some tests failed.",
            ]
        );
    }

    #[test]
    fn truncated_run_has_no_summary() {
        let entries = vec![case(1, "Arithmetic", Outcome::Pass, "Arithmetic tests passed")];
        assert_eq!(replay_verdicts(&entries), ["Test 1 (Arithmetic) passed"]);
    }

    #[test]
    fn passing_run_ends_with_blank_line_and_success() {
        let entries =
            vec![LogEntry::new("stdcheck::r::001", LogLevel::Info, events::SUITE_END).with_exit_code(0)];
        assert_eq!(replay_verdicts(&entries), ["", "All basic checks passed!"]);
    }
}
