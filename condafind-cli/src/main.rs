//! Condafind CLI - resolve and optionally run a conda install command.

mod error;
mod install;
mod logging;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use condafind::http::Sleeper;
use condafind::{FetchConfig, HttpClient, ReqwestClient, Resolver, ResolverConfig};

use crate::error::CliError;

/// Resolve a package name to a channel-qualified conda install command.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the package to resolve.
    package: String,

    /// Preferred channel for installation (e.g. conda-forge).
    #[arg(short, long)]
    channel: Option<String>,

    /// Print the resolved install command instead of executing it.
    #[arg(long)]
    dry_run: bool,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Number of fetch attempts before giving up.
    #[arg(long)]
    retries: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init();

    // Exit by returning the code rather than calling process::exit:
    // the logging guard must drop first, or the terminating error line
    // never leaves the non-blocking writer's queue.
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut fetch = FetchConfig::default();
    if let Some(secs) = cli.timeout {
        fetch = fetch.with_timeout_secs(secs);
    }
    if let Some(attempts) = cli.retries {
        fetch = fetch.with_max_attempts(attempts);
    }

    let client =
        ReqwestClient::with_timeout(fetch.timeout).map_err(|e| CliError::Setup(e.to_string()))?;
    let config = ResolverConfig::default().with_fetch(fetch);
    let resolver = Resolver::new(client, config);

    dispatch(&cli, &resolver, &mut std::io::stdout())
}

/// Resolves the package, then either prints the command (dry-run) or
/// hands it to the operating system.
fn dispatch<C, S, W>(cli: &Cli, resolver: &Resolver<C, S>, out: &mut W) -> Result<(), CliError>
where
    C: HttpClient,
    S: Sleeper,
    W: Write,
{
    let resolution = resolver.resolve(&cli.package, cli.channel.as_deref())?;
    info!(
        package = resolution.package,
        channel = resolution.channel,
        "package is available"
    );

    if cli.dry_run {
        writeln!(out, "{}", resolution.command)
            .map_err(|e| CliError::Output(e.to_string()))?;
        return Ok(());
    }

    install::run(&resolution.command)
}
