//! Diagnostics sink initialization.
//!
//! Log lines are timestamped, leveled text on stderr; they are a human
//! surface, not a machine-readable contract. The returned guard owns the
//! background writer and must live until the process exits.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the process-wide tracing subscriber.
///
/// `RUST_LOG` selects verbosity; the default is `info`.
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_target(false)
        .init();

    guard
}
