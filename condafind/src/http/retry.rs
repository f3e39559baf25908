//! Retry backoff policy.
//!
//! The backoff schedule is a plain value so the retry behavior can be
//! tested without a network or a clock: [`BackoffPolicy::delay_after`]
//! answers "given that attempt `i` just failed, how long do we wait
//! before the next one, if any?".

use std::time::Duration;

/// Exponential backoff schedule for a bounded number of attempts.
///
/// The delay after failed attempt `i` (0-indexed) is `base_delay * 2^i`.
/// No delay follows the final attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Total number of attempts (including the initial attempt).
    pub max_attempts: u32,

    /// Delay after the first failed attempt.
    pub base_delay: Duration,
}

impl BackoffPolicy {
    /// Creates a policy with the given attempt bound and base delay.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Returns the delay to wait after failed attempt `attempt` (0-indexed),
    /// or `None` if the attempt budget is exhausted.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt + 1 >= self.max_attempts {
            return None;
        }
        // Saturate rather than overflow for absurd attempt counts.
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        Some(self.base_delay.saturating_mul(factor))
    }
}

/// Trait for inserting delays between retry attempts.
///
/// Injected into the fetcher so tests can observe the exact backoff
/// schedule without actually waiting.
pub trait Sleeper {
    /// Blocks the current thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
