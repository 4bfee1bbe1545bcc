//! Standard-library conformance probe for freshly built images.
//!
//! Takes no arguments. Exits 0 iff every probe passed.

use std::process::ExitCode;

use stdcheck_core::standard_registry;
use stdcheck_harness::config::RUN_LABEL;
use stdcheck_harness::structured_log::LogEmitter;
use stdcheck_harness::{HarnessConfig, SuiteRunner};

fn main() -> ExitCode {
    let config = HarnessConfig::from_env();

    let mut runner = SuiteRunner::new(standard_registry());
    if let Some(path) = &config.log_path {
        match LogEmitter::to_file(path, RUN_LABEL, &config.run_id) {
            Ok(log) => runner = runner.with_log(log),
            Err(err) => eprintln!(
                "stdcheck: cannot open evidence log {}: {err}",
                path.display()
            ),
        }
    }

    let mut stdout = std::io::stdout().lock();
    match runner.run(&mut stdout) {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(err) => {
            eprintln!("stdcheck: {err}");
            ExitCode::FAILURE
        }
    }
}
