//! Exponential backoff around release lookups.
//!
//! MusicBrainz throttles aggressively, so a failed lookup is retried after
//! a growing delay instead of immediately. There is no jitter: the delay
//! sequence is `initial, initial * m, initial * m^2, ...` capped at
//! `max_interval`.
//!
//! Every [`LookupError`] is retried, whatever its kind. Only the policy
//! decides when to stop.
//!
//! [`RetryPolicy`] is plain configuration and can be shared by every row of
//! a batch. Each call to [`RetryPolicy::retry`] starts a fresh
//! [`ExponentialBackoff`], so one record's retry history never affects the
//! next one.

use std::future::Future;
use std::time::{Duration, Instant};

use super::domain::LookupError;

/// Backoff configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Delay after the first failure
    pub initial_interval: Duration,
    /// Growth factor between consecutive delays (>= 1.0)
    pub multiplier: f64,
    /// Upper bound for a single delay
    pub max_interval: Duration,
    /// Give up once this much time would be spent; `None` retries forever
    pub max_elapsed: Option<Duration>,
    /// Give up after this many attempts; `None` means no attempt limit
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(500),
            multiplier: 1.5,
            max_interval: Duration::from_secs(60),
            max_elapsed: Some(Duration::from_secs(15 * 60)),
            max_attempts: None,
        }
    }
}

/// A retried lookup that the policy gave up on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gave up after {attempts} attempts: {last}")]
pub struct RetryError {
    pub attempts: u32,
    pub elapsed: Duration,
    /// Error of the final attempt
    pub last: LookupError,
}

/// Backoff state for one retried operation.
#[derive(Debug)]
pub struct ExponentialBackoff {
    policy: RetryPolicy,
    current: Duration,
    started: Instant,
    failures: u32,
}

impl ExponentialBackoff {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            current: policy.initial_interval.min(policy.max_interval),
            started: Instant::now(),
            failures: 0,
        }
    }

    /// Record a failed attempt and return how long to wait before the next
    /// one, or `None` if the policy says to stop.
    pub fn next_backoff(&mut self) -> Option<Duration> {
        self.failures += 1;

        if let Some(max_attempts) = self.policy.max_attempts
            && self.failures >= max_attempts
        {
            return None;
        }

        let delay = self.current;
        if let Some(max_elapsed) = self.policy.max_elapsed
            && self.started.elapsed() + delay > max_elapsed
        {
            return None;
        }

        let grown = Duration::try_from_secs_f64(self.current.as_secs_f64() * self.policy.multiplier)
            .unwrap_or(self.policy.max_interval);
        self.current = grown.min(self.policy.max_interval);

        Some(delay)
    }

    /// Failed attempts recorded so far
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl RetryPolicy {
    /// Fresh backoff state for one operation
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::new(*self)
    }

    /// Run `op` until it succeeds or the policy gives up.
    pub async fn retry<T, F, Fut>(&self, mut op: F) -> Result<T, RetryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LookupError>>,
    {
        let mut backoff = self.backoff();

        loop {
            let err = match op().await {
                Ok(value) => {
                    if backoff.failures() > 0 {
                        tracing::debug!(
                            attempts = backoff.failures() + 1,
                            elapsed_ms = backoff.elapsed().as_millis(),
                            "Lookup succeeded after retry"
                        );
                    }
                    return Ok(value);
                }
                Err(err) => err,
            };

            let Some(delay) = backoff.next_backoff() else {
                tracing::error!(
                    attempts = backoff.failures(),
                    elapsed_ms = backoff.elapsed().as_millis(),
                    error = %err,
                    "Lookup failed: retries exhausted"
                );
                return Err(RetryError {
                    attempts: backoff.failures(),
                    elapsed: backoff.elapsed(),
                    last: err,
                });
            };

            tracing::warn!(
                attempt = backoff.failures(),
                backoff_ms = delay.as_millis(),
                error = %err,
                "Lookup failed, will retry after backoff"
            );

            tokio::time::sleep(delay).await;
        }
    }
}
