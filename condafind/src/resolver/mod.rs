//! The resolution pipeline.
//!
//! [`Resolver`] composes the fetcher, the document parsers, and the
//! channel policy into a single synchronous pipeline:
//!
//! search → channel probing → command extraction → validation
//!
//! Each stage failure maps to its own [`ResolveError`] variant and
//! aborts the pipeline immediately; retries exist only inside the
//! fetcher, and no stage is ever revisited.

mod channels;
mod error;

pub use channels::{priority_channels, DEFAULT_CHANNELS};
pub use error::{ResolveError, ResolveResult};

use tracing::{debug, info, warn};

use crate::command::{extract_install_command, InstallCommand};
use crate::config::{Endpoints, ResolverConfig};
use crate::document::{ModulePage, SearchDocument};
use crate::http::{BackoffPolicy, Fetcher, HttpClient, Sleeper, ThreadSleeper};

/// Successful resolution: the channel the package was found under and
/// its validated install command.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Requested package name.
    pub package: String,

    /// Channel whose page supplied the command.
    pub channel: String,

    /// The validated install command.
    pub command: InstallCommand,
}

/// Resolves a package name to a channel-qualified install command.
///
/// One resolver owns one HTTP session; the client is reused across the
/// sequential fetches of a resolution, but that is an optimization, not
/// a correctness requirement.
pub struct Resolver<C: HttpClient, S: Sleeper = ThreadSleeper> {
    fetcher: Fetcher<C, S>,
    endpoints: Endpoints,
}

impl<C: HttpClient> Resolver<C> {
    /// Creates a resolver with the production sleeper.
    pub fn new(client: C, config: ResolverConfig) -> Self {
        Self::with_sleeper(client, config, ThreadSleeper)
    }
}

impl<C: HttpClient, S: Sleeper> Resolver<C, S> {
    /// Creates a resolver with an injected sleeper.
    pub fn with_sleeper(client: C, config: ResolverConfig, sleeper: S) -> Self {
        let policy = BackoffPolicy::new(config.fetch.max_attempts, config.fetch.base_delay);
        Self {
            fetcher: Fetcher::new(client, policy, sleeper),
            endpoints: config.endpoints,
        }
    }

    /// Runs the full pipeline for `package`.
    ///
    /// `preferred_channel` is prepended to the channel priority order
    /// when it names a known channel, and ignored otherwise.
    pub fn resolve(
        &self,
        package: &str,
        preferred_channel: Option<&str>,
    ) -> ResolveResult<Resolution> {
        let document = self.search(package)?;
        let (page, channel) = self.probe_channels(package, &document, preferred_channel)?;

        let raw = extract_install_command(&page).ok_or_else(|| {
            warn!(package, channel, "package page has no install command");
            ResolveError::CommandNotFound {
                channel: channel.clone(),
            }
        })?;

        let command = InstallCommand::parse(raw.clone())
            .ok_or(ResolveError::CommandInvalid { command: raw })?;

        info!(package, channel, %command, "resolved install command");
        Ok(Resolution {
            package: package.to_string(),
            channel,
            command,
        })
    }

    /// Fetches and parses the search-results page for `package`.
    fn search(&self, package: &str) -> ResolveResult<SearchDocument> {
        let url = format!(
            "{}{}",
            self.endpoints.search_url,
            urlencoding::encode(package)
        );
        info!(package, "searching for package");
        let body = self.fetcher.fetch(&url)?;
        Ok(SearchDocument::parse(&body))
    }

    /// Probes candidate channels in document order and returns the first
    /// allowed channel whose page fetches successfully.
    fn probe_channels(
        &self,
        package: &str,
        document: &SearchDocument,
        preferred_channel: Option<&str>,
    ) -> ResolveResult<(ModulePage, String)> {
        if document.is_empty() {
            return Err(ResolveError::NoSearchResults {
                package: package.to_string(),
            });
        }

        let allowed = priority_channels(preferred_channel);

        for candidate in document.candidates() {
            let channel = candidate.channel.as_str();
            if !allowed.iter().any(|c| c == channel) {
                debug!(package, channel, "candidate channel not in allowed set");
                continue;
            }

            let url = format!("{}{}/{}", self.endpoints.module_url, channel, package);
            match self.fetcher.fetch(&url) {
                Ok(body) => {
                    info!(package, channel, "package found in channel");
                    return Ok((ModulePage::parse(&body), channel.to_string()));
                }
                Err(err) => {
                    warn!(package, channel, %err, "channel probe failed, trying next candidate");
                }
            }
        }

        Err(ResolveError::NoAllowedChannel {
            package: package.to_string(),
        })
    }
}
