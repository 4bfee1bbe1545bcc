//! CLI for inspecting stdcheck evidence logs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stdcheck_harness::HarnessError;
use stdcheck_harness::replay::replay_verdicts;
use stdcheck_harness::structured_log::{read_log_file, validate_log_file};

/// Evidence log tooling for stdcheck.
#[derive(Debug, Parser)]
#[command(name = "stdcheck-log")]
#[command(about = "Inspect JSONL evidence logs written by test_std")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate every line of an evidence log against the schema.
    Validate {
        /// Structured JSONL log path.
        #[arg(long)]
        log: PathBuf,
    },
    /// Print the verdict lines recorded in an evidence log.
    Summary {
        /// Structured JSONL log path.
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { log } => {
            let (line_count, errors) = validate_log_file(&log)?;
            println!("{line_count} lines, {} errors", errors.len());
            for error in &errors {
                eprintln!("{error}");
            }
            if !errors.is_empty() {
                return Err(HarnessError::InvalidLog {
                    path: log,
                    count: errors.len(),
                }
                .into());
            }
        }
        Command::Summary { log } => {
            let entries = read_log_file(&log)?;
            for line in replay_verdicts(&entries) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
