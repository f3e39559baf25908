//! CLI error types.

use thiserror::Error;

use condafind::ResolveError;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The resolution pipeline failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The HTTP client could not be constructed.
    #[error("failed to set up HTTP client: {0}")]
    Setup(String),

    /// Writing the resolved command to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(String),

    /// The install process could not be started.
    #[error("failed to start '{program}': {reason}")]
    Spawn {
        /// Program that was handed to the OS.
        program: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The install process exited with a non-zero status.
    #[error("install command exited with {status}")]
    Execution {
        /// Exit status reported by the OS.
        status: std::process::ExitStatus,
    },
}
