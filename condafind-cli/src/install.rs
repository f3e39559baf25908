//! Hand-off of the resolved command to the operating system.

use std::process::Command;

use tracing::info;

use condafind::InstallCommand;

use crate::error::CliError;

/// Runs the validated install command as a child process.
///
/// The command is tokenized on whitespace; no shell is involved. A
/// non-zero child exit is surfaced as [`CliError::Execution`] and never
/// retried.
pub fn run(command: &InstallCommand) -> Result<(), CliError> {
    let argv = command.argv();
    // Validation guarantees at least three tokens.
    let (program, args) = match argv.split_first() {
        Some(split) => split,
        None => {
            return Err(CliError::Spawn {
                program: String::new(),
                reason: "empty command".to_string(),
            })
        }
    };

    info!(%command, "executing install command");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| CliError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(CliError::Execution { status });
    }

    Ok(())
}
