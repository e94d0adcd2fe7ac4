//! Bounded retry decorator.
//!
//! Wraps any [`GenerativeBackend`] and re-issues a call after transient
//! failures. The phase executor's per-call timeout covers all attempts
//! together.

use async_trait::async_trait;
use ideaforge_application::ports::backend::{BackendError, BackendRequest, GenerativeBackend};
use ideaforge_domain::ConfigurationError;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. `1` disables retries.
    pub max_attempts: u32,
    /// Pause between attempts, doubled after each failure
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_attempts > 1
    }
}

pub struct RetryingBackend<B> {
    inner: B,
    policy: RetryPolicy,
}

impl<B: GenerativeBackend> RetryingBackend<B> {
    pub fn new(inner: B, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

#[async_trait]
impl<B: GenerativeBackend> GenerativeBackend for RetryingBackend<B> {
    fn validate(&self) -> Result<(), ConfigurationError> {
        self.inner.validate()
    }

    async fn invoke(&self, request: &BackendRequest) -> Result<String, BackendError> {
        let mut backoff = self.policy.backoff;
        let mut attempt = 1;
        loop {
            match self.inner.invoke(request).await {
                Err(e) if e.is_transient() && attempt < self.policy.max_attempts => {
                    debug!(
                        model = %request.model,
                        attempt,
                        "Transient backend error, retrying: {}",
                        e
                    );
                    tokio::time::sleep(backoff).await;
                    backoff = backoff.saturating_mul(2);
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }
}
