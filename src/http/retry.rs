//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for a single HTTP request.
///
/// Mutation endpoints (dispatcher, broadcast, typed-data creation) use
/// [`RetryPolicy::None`]: the orchestrator owns the single relay → contract
/// fallback and nothing below it may retry. Read endpoints default to
/// [`RetryPolicy::Idempotent`].
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries.
    #[default]
    None,
    /// Retry on transport failures and 502/503/504, with backoff on 429.
    Idempotent,
    /// Caller-provided retry configuration.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retry attempts beyond the initial request.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Ceiling applied to the backoff.
    pub max_delay: Duration,
    /// Multiplier applied after each attempt.
    pub backoff_factor: f64,
    /// Randomize delays by +/-25% to avoid thundering herds.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// The config used for idempotent (GET) requests.
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 502, 503, 504],
            ..Self::default()
        }
    }

    /// Delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let spread = capped * 0.25;
            let offset = (rand::random::<f64>() - 0.5) * 2.0 * spread;
            (capped + offset).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
