//! HTTP transport: client abstraction, retry policy, and the fetcher.

mod client;
mod fetcher;
mod retry;

pub use client::{HttpClient, HttpError, ReqwestClient};
pub use fetcher::{FetchError, Fetcher};
pub use retry::{BackoffPolicy, Sleeper, ThreadSleeper};

#[cfg(test)]
pub use client::tests::MockHttpClient;
#[cfg(test)]
pub use retry::tests::MockSleeper;
