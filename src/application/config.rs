/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_MAX_RETRY_COUNT, DEFAULT_RETRY_DELAY_SECS, DEFAULT_TIMEOUT_SECS, ENV_API_KEY,
    ENV_BASE_URL, ENV_MAX_RETRY_COUNT, ENV_REST_TIMEOUT, ENV_RETRY_DELAY_SECS,
};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Authentication credentials for the Yonoma API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API key sent as a bearer token
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Configuration for the REST API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to, verbatim
    pub base_url: String,
    /// Timeout in seconds for REST API requests (0 = no timeout)
    pub timeout: u64,
}

/// Main configuration for the Yonoma API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry policy for transport failures
    pub retry: RetryConfig,
}

impl Config {
    /// Creates a configuration from an API key and a base URL.
    ///
    /// The base URL is used as given: endpoint paths are appended without
    /// inserting a slash, so it normally ends with `/`.
    ///
    /// # Example
    /// ```
    /// use yonoma_client::application::config::Config;
    /// use yonoma_client::constants::PRODUCTION_BASE_URL;
    ///
    /// let config = Config::new("my-api-key", PRODUCTION_BASE_URL).with_timeout(10);
    /// assert_eq!(config.rest_api.timeout, 10);
    /// ```
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            retry: RetryConfig::default(),
        }
    }

    /// Loads the configuration from the environment (and a `.env` file if present).
    ///
    /// `YONOMA_API_KEY` and `YONOMA_BASE_URL` are required. `YONOMA_REST_TIMEOUT`,
    /// `YONOMA_MAX_RETRY_COUNT` and `YONOMA_RETRY_DELAY_SECS` are optional.
    ///
    /// # Errors
    /// `AppError::Config` when a required variable is missing
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_required(ENV_API_KEY)?;
        let base_url = get_env_required(ENV_BASE_URL)?;

        Ok(Self::new(api_key, base_url)
            .with_timeout(get_env_or_default(ENV_REST_TIMEOUT, DEFAULT_TIMEOUT_SECS))
            .with_retry(RetryConfig::with_max_retries_and_delay(
                get_env_or_default(ENV_MAX_RETRY_COUNT, DEFAULT_MAX_RETRY_COUNT),
                get_env_or_default(ENV_RETRY_DELAY_SECS, DEFAULT_RETRY_DELAY_SECS),
            )))
    }

    /// Sets the request timeout in seconds; 0 disables it
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }

    /// Sets the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.rest_api.timeout > 0).then(|| Duration::from_secs(self.rest_api.timeout))
    }
}
