//! Shared wrapper around command execution.
//!
//! Every subcommand produces its output as a string and reports failures
//! through `Result`. This wrapper owns the process boundary: it prints the
//! output, formats the error chain for stderr, and picks the exit code.
//! Errors pass through unchanged; nothing is caught, retried, or rewritten.

use std::future::Future;
use std::process::ExitCode;

use crate::commands::CommandResult;

/// Awaits a command and turns its outcome into an exit code.
pub async fn run<F>(command: F) -> ExitCode
where
    F: Future<Output = CommandResult>,
{
    match command.await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
