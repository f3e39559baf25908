//! HTTP client abstraction for testability.

use std::time::Duration;

use thiserror::Error;

/// Errors from a single HTTP request attempt.
#[derive(Debug, Error, Clone)]
pub enum HttpError {
    /// The server answered with a non-success, non-redirect status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// Transport-level failure (connection error, timeout, TLS failure).
    #[error("request to {url} failed: {reason}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

/// Trait for HTTP GET operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient {
    /// Performs an HTTP GET request and returns the response body.
    ///
    /// Any non-2xx/3xx status is reported as an error; the retry policy
    /// above this layer treats all error classes identically.
    fn get(&self, url: &str) -> Result<String, HttpError>;
}

/// Real HTTP client implementation using blocking reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a client with the given per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String, HttpError> {
        let response = self.client.get(url).send().map_err(|e| HttpError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(HttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| HttpError::Transport {
            url: url.to_string(),
            reason: format!("failed to read response body: {}", e),
        })
    }
}

#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Mock HTTP client for testing.
    ///
    /// Responses are scripted per URL and consumed in order, so a test can
    /// make the same URL fail twice and then succeed. Every requested URL
    /// is recorded for later assertions.
    #[derive(Default)]
    pub struct MockHttpClient {
        responses: Mutex<HashMap<String, VecDeque<Result<String, HttpError>>>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script the next response for `url`.
        pub fn respond(&self, url: &str, response: Result<String, HttpError>) {
            self.responses
                .lock()
                .unwrap()
                .entry(url.to_string())
                .or_default()
                .push_back(response);
        }

        /// Script `count` consecutive transport failures for `url`.
        pub fn fail(&self, url: &str, count: usize) {
            for _ in 0..count {
                self.respond(
                    url,
                    Err(HttpError::Transport {
                        url: url.to_string(),
                        reason: "connection refused".to_string(),
                    }),
                );
            }
        }

        /// All URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<String, HttpError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .get_mut(url)
                .and_then(|queue| queue.pop_front())
                .unwrap_or_else(|| {
                    Err(HttpError::Transport {
                        url: url.to_string(),
                        reason: "no scripted response".to_string(),
                    })
                })
        }
    }

    #[test]
    fn test_mock_client_scripted_success() {
        let mock = MockHttpClient::new();
        mock.respond("http://example.com", Ok("body".to_string()));

        assert_eq!(mock.get("http://example.com").unwrap(), "body");
        assert_eq!(mock.requests(), vec!["http://example.com"]);
    }

    #[test]
    fn test_mock_client_consumes_responses_in_order() {
        let mock = MockHttpClient::new();
        mock.fail("http://example.com", 1);
        mock.respond("http://example.com", Ok("second".to_string()));

        assert!(mock.get("http://example.com").is_err());
        assert_eq!(mock.get("http://example.com").unwrap(), "second");
    }

    #[test]
    fn test_mock_client_unscripted_request_fails() {
        let mock = MockHttpClient::new();
        assert!(mock.get("http://unscripted.example").is_err());
    }
}
