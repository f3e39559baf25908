//! Bounded-retry HTTP fetching.
//!
//! [`Fetcher`] wraps an [`HttpClient`] with the retry/backoff schedule
//! from [`BackoffPolicy`]. Every attempt outcome produces exactly one
//! log line: info on send, error on failure, info when a retry is
//! scheduled.

use thiserror::Error;
use tracing::{error, info};

use super::client::{HttpClient, HttpError};
use super::retry::{BackoffPolicy, Sleeper};

/// Terminal fetch failure after all retry attempts.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt failed; carries the last underlying error.
    #[error("request to {url} failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Requested URL.
        url: String,
        /// Number of attempts made.
        attempts: u32,
        /// Error from the final attempt.
        source: HttpError,
    },
}

/// HTTP fetcher with bounded retries and exponential backoff.
///
/// All error classes (bad status, transport failure, timeout) count as
/// one failed attempt and are retried identically.
pub struct Fetcher<C: HttpClient, S: Sleeper> {
    client: C,
    policy: BackoffPolicy,
    sleeper: S,
}

impl<C: HttpClient, S: Sleeper> Fetcher<C, S> {
    /// Creates a fetcher from its collaborators.
    pub fn new(client: C, policy: BackoffPolicy, sleeper: S) -> Self {
        Self {
            client,
            policy,
            sleeper,
        }
    }

    /// Fetches `url`, returning the response body of the first successful
    /// attempt, or [`FetchError::RetriesExhausted`] once the attempt
    /// budget is spent.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let max_attempts = self.policy.max_attempts;
        let mut attempt = 0;

        loop {
            info!(url, attempt = attempt + 1, max_attempts, "sending GET request");

            let last_error = match self.client.get(url) {
                Ok(body) => return Ok(body),
                Err(err) => {
                    error!(url, attempt = attempt + 1, %err, "request attempt failed");
                    err
                }
            };

            match self.policy.delay_after(attempt) {
                Some(delay) => {
                    info!(
                        url,
                        delay_secs = delay.as_secs_f64(),
                        next_attempt = attempt + 2,
                        max_attempts,
                        "retrying after backoff"
                    );
                    self.sleeper.sleep(delay);
                    attempt += 1;
                }
                None => {
                    return Err(FetchError::RetriesExhausted {
                        url: url.to_string(),
                        attempts: max_attempts,
                        source: last_error,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
impl<C: HttpClient, S: Sleeper> Fetcher<C, S> {
    /// Test access to the underlying client.
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    /// Test access to the injected sleeper.
    pub(crate) fn sleeper(&self) -> &S {
        &self.sleeper
    }
}
