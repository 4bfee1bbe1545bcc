//! Runtime configuration.
//!
//! `test_std` takes no arguments. The only knobs are environment variables that
//! select where evidence is logged; they never change which probes run, their
//! order, stdout, or the exit code.
//!
//! - `STDCHECK_LOG`: path of the JSONL evidence log. Unset or empty: no log.
//! - `STDCHECK_RUN_ID`: run identifier embedded in trace ids (default `pid-<pid>`).

use std::path::PathBuf;

pub const LOG_PATH_ENV: &str = "STDCHECK_LOG";
pub const RUN_ID_ENV: &str = "STDCHECK_RUN_ID";
/// First component of every trace id.
pub const RUN_LABEL: &str = "stdcheck";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Evidence log destination, if any.
    pub log_path: Option<PathBuf>,
    pub run_id: String,
}

impl HarnessConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup(LOG_PATH_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        let run_id = lookup(RUN_ID_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty() && !raw.contains("::"))
            .unwrap_or_else(|| format!("pid-{}", std::process::id()));
        Self { log_path, run_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_disable_logging() {
        let config = HarnessConfig::from_lookup(lookup(&[]));
        assert_eq!(config.log_path, None);
        assert_eq!(config.run_id, format!("pid-{}", std::process::id()));
    }

    #[test]
    fn log_path_and_run_id_are_read() {
        let config = HarnessConfig::from_lookup(lookup(&[
            (LOG_PATH_ENV, "/tmp/stdcheck.jsonl"),
            (RUN_ID_ENV, "image-build-7"),
        ]));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/stdcheck.jsonl")));
        assert_eq!(config.run_id, "image-build-7");
    }

    #[test]
    fn blank_values_fall_back() {
        let config =
            HarnessConfig::from_lookup(lookup(&[(LOG_PATH_ENV, "   "), (RUN_ID_ENV, "")]));
        assert_eq!(config.log_path, None);
        assert!(config.run_id.starts_with("pid-"));
    }

    #[test]
    fn run_id_with_separator_is_rejected() {
        let config = HarnessConfig::from_lookup(lookup(&[(RUN_ID_ENV, "a::b")]));
        assert!(config.run_id.starts_with("pid-"));
    }
}
