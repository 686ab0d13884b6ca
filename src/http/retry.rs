//! Retry policies for HTTP requests.
//!
//! Every endpoint is single-attempt unless a caller opts reads into
//! retries through configuration.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// One attempt. Used for every write.
    #[default]
    None,
    /// Caller-supplied retry settings.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_factor: f64,
    /// Spread each delay by ±25%.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    pub fn idempotent() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay before retry number `attempt + 1` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt.min(16) as i32);
        let capped_ms = base_ms.min(self.max_delay.as_millis() as f64);

        if !self.jitter {
            return Duration::from_millis(capped_ms as u64);
        }

        let spread = capped_ms * 0.25;
        let offset = (rand::random::<f64>() * 2.0 - 1.0) * spread;
        Duration::from_millis((capped_ms + offset).max(0.0) as u64)
    }
}
