//! Bounded retry with linear backoff
//!
//! Waiting uses `tokio::time::sleep`, so the worker thread is free while a
//! retry is pending.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::domain::value_objects::{NewProfile, ProfileUpdate, UserProfile};
use crate::errors::DomainError;

use super::traits::UserProvisioner;

/// Attempt count and delay curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay after attempt `n` is `base_delay * n`
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }

    /// Runs `operation` until it succeeds or the attempts are used up
    ///
    /// The closure receives the 1-based attempt number. The last error is
    /// returned unchanged.
    pub async fn run<T, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, DomainError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation(attempt).await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(attempt, "{} succeeded after retry", label);
                    }
                    return Ok(value);
                }
                Err(e) if attempt >= attempts => {
                    error!("All {} attempts of {} failed: {}", attempts, label, e);
                    return Err(e);
                }
                Err(e) => {
                    warn!("Attempt {} of {} failed: {}", attempt, label, e);
                    tokio::time::sleep(self.delay_after(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }
}

/// Wraps a provisioner so every call is retried under a [`RetryPolicy`]
pub struct RetryingProvisioner {
    inner: Arc<dyn UserProvisioner>,
    policy: RetryPolicy,
}

impl RetryingProvisioner {
    pub fn new(inner: Arc<dyn UserProvisioner>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl UserProvisioner for RetryingProvisioner {
    async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile, DomainError> {
        self.policy
            .run("profile creation", |_| self.inner.create_profile(profile))
            .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), DomainError> {
        self.policy
            .run("profile update", |_| self.inner.update_profile(update))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn failure(attempt: u32) -> DomainError {
        DomainError::Collaborator {
            message: format!("attempt {}", attempt),
        }
    }

    #[test]
    fn test_delay_grows_linearly() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(1));
        assert_eq!(policy.delay_after(2), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_last_error_after_max_attempts() {
        let policy = RetryPolicy::default();
        let calls = AtomicU32::new(0);
        let started = tokio::time::Instant::now();

        let result: Result<(), _> = policy
            .run("test", |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(failure(attempt)) }
            })
            .await;

        assert_eq!(result.unwrap_err(), failure(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_at_first_success() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));
        let calls = AtomicU32::new(0);

        let result = policy
            .run("test", |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 2 {
                        Err(failure(attempt))
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let policy = RetryPolicy::new(0, Duration::from_secs(1));

        let result: Result<(), _> = policy.run("test", |attempt| async move { Err(failure(attempt)) }).await;

        assert_eq!(result.unwrap_err(), failure(1));
    }
}
