//! Harness-level errors. Probe failures are not errors here; they are verdicts.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{}: {count} validation error(s)", path.display())]
    InvalidLog { path: PathBuf, count: usize },
}
