//! `primer` binary: runs the default scenario and prints to stdout.
//!
//! Command-line arguments are accepted and ignored.

use std::io;
use std::process::ExitCode;

use primer::engine::{Driver, DriverConfig};
use tracing::{debug, error};

fn main() -> ExitCode {
    primer::logging::init();

    let driver = match Driver::new(DriverConfig::default()) {
        Ok(driver) => driver,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match driver.run(&mut out) {
        Ok(report) => {
            debug!(run = %report.run_id, printed = report.printed, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
