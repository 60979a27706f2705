/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRY_COUNT, DEFAULT_RETRY_DELAY_SECS};
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Retry policy for transport failures.
///
/// Only connect failures are retried, since the request never reached the
/// server. Timeouts, non-2xx answers, payload encoding failures and
/// undecodable bodies are returned on the first attempt.
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Number of retries after the first attempt (0 = single attempt)
    pub max_retry_count: u32,
    /// Delay in seconds before each retry
    pub retry_delay_secs: u64,
}

impl RetryConfig {
    /// Single attempt, no retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retry_count: DEFAULT_MAX_RETRY_COUNT,
            retry_delay_secs: DEFAULT_RETRY_DELAY_SECS,
        }
    }

    /// Up to `max_retries` retries with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: max_retries,
            ..Self::none()
        }
    }

    /// Sets the delay, keeping the current retry count
    #[must_use]
    pub fn with_delay(self, delay_secs: u64) -> Self {
        Self {
            retry_delay_secs: delay_secs,
            ..self
        }
    }

    /// Up to `max_retries` retries, `delay_secs` apart
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: max_retries,
            retry_delay_secs: delay_secs,
        }
    }

    /// Total number of attempts, first one included
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retry_count.saturating_add(1)
    }

    /// Delay before each retry
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    /// Runs `attempt` until it succeeds, fails with an error that is not
    /// [`AppError::is_retryable_transport`], or `max_attempts` is reached.
    pub async fn run<T, F, Fut>(&self, mut attempt: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let max_attempts = self.max_attempts();
        let mut current = 1;

        loop {
            match attempt().await {
                Err(e) if e.is_retryable_transport() && current < max_attempts => {
                    warn!(
                        "Connection failed (attempt {}/{}): {}. Waiting {} seconds before retry...",
                        current, max_attempts, e, self.retry_delay_secs
                    );
                    tokio::time::sleep(self.delay()).await;
                    current += 1;
                }
                result => return result,
            }
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::none()
    }
}
