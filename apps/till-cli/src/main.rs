//! # Till Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Run the till, report to stdout
//! 4. Exit 1 with the error message on failure

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use till_cli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    till_cli::init_tracing();

    let stdout = std::io::stdout();
    match till_cli::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Till run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
