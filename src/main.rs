//! Stepgen: scaffolds the operations contract and planner prompt for a STEP.
//!
//! This is the main entry point for the `stepgen` CLI. It parses arguments,
//! resolves the repository root once, dispatches to the command handler, and
//! maps errors to exit codes.

mod cli;
mod commands;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod layout;
pub mod placement;
pub mod step;
pub mod templates;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::RepoContext;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let result = RepoContext::resolve(cli.root.as_deref())
        .and_then(|ctx| commands::dispatch(cli.command, &ctx));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Install the stderr log subscriber. Report lines stay on stdout.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
