//! Configuration for the resolution pipeline.
//!
//! All knobs live in plain value structs with builder-style `with_*`
//! methods so the CLI can translate its flags in one place.

use std::time::Duration;

/// Default base URL for package searches.
pub const DEFAULT_SEARCH_URL: &str = "https://anaconda.org/search?q=";

/// Default base URL for channel-specific package pages.
pub const DEFAULT_MODULE_URL: &str = "https://anaconda.org/";

/// Default per-attempt HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of fetch attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default base delay for exponential backoff (1 second).
///
/// The delay before attempt `i + 1` is `base_delay * 2^i`.
pub const DEFAULT_BASE_DELAY_SECS: u64 = 1;

/// Remote endpoints queried during resolution.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base search URL; the URL-encoded package name is appended.
    pub search_url: String,

    /// Base package-page URL; `<channel>/<name>` is appended.
    pub module_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            module_url: DEFAULT_MODULE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Set the base search URL.
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Set the base package-page URL.
    pub fn with_module_url(mut self, url: impl Into<String>) -> Self {
        self.module_url = url.into();
        self
    }
}

/// HTTP fetch configuration: timeout and retry behavior.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-attempt request timeout.
    pub timeout: Duration,

    /// Total number of attempts (including the initial attempt).
    pub max_attempts: u32,

    /// Base delay for exponential backoff between attempts.
    pub base_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_secs(DEFAULT_BASE_DELAY_SECS),
        }
    }
}

impl FetchConfig {
    /// Set the per-attempt timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the total number of attempts.
    ///
    /// A value of 0 is clamped to 1; at least one attempt is always made.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the base backoff delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }
}

/// Top-level configuration for a [`Resolver`](crate::resolver::Resolver).
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Remote endpoints.
    pub endpoints: Endpoints,

    /// Fetch timeout and retry settings.
    pub fetch: FetchConfig,
}

impl ResolverConfig {
    /// Replace the endpoint configuration.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Replace the fetch configuration.
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }
}
