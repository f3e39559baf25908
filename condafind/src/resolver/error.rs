//! Resolution error taxonomy.
//!
//! Every variant is terminal: transient errors are absorbed and retried
//! only inside the fetcher, and once any stage fails its own check the
//! pipeline aborts with no partial result.

use thiserror::Error;

use crate::http::FetchError;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Terminal failures of the resolution pipeline.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The fetcher spent its whole attempt budget without a success.
    #[error(transparent)]
    TransportExhausted(#[from] FetchError),

    /// The search page yielded no parseable candidates.
    #[error("package '{package}' is not available from any channel")]
    NoSearchResults {
        /// Requested package name.
        package: String,
    },

    /// No candidate channel was allowed, or every allowed candidate
    /// failed to fetch.
    #[error("package '{package}' is not available from the preferred channels")]
    NoAllowedChannel {
        /// Requested package name.
        package: String,
    },

    /// The package page had no code fragment containing the install marker.
    #[error("no install command found on the '{channel}' page")]
    CommandNotFound {
        /// Channel whose page was scanned.
        channel: String,
    },

    /// The extracted command failed structural validation.
    #[error("extracted command is not a valid install command: '{command}'")]
    CommandInvalid {
        /// The rejected command text.
        command: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_search_results_display() {
        let err = ResolveError::NoSearchResults {
            package: "numpy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "package 'numpy' is not available from any channel"
        );
    }

    #[test]
    fn test_command_invalid_display_carries_command() {
        let err = ResolveError::CommandInvalid {
            command: "pip install numpy".to_string(),
        };
        assert!(err.to_string().contains("pip install numpy"));
    }
}
