/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Entry point of the library
//!
//! `Client` builds one [`HttpClient`] from a [`Config`] and hands out the
//! contact, list and tag services, all sharing that executor.
//!
//! # Example
//! ```ignore
//! use yonoma_client::prelude::*;
//!
//! let client = Client::new(Config::new("my-api-key", PRODUCTION_BASE_URL))?;
//! let tags = client.tags().list().await?;
//! ```

use crate::application::config::Config;
use crate::application::services::{ContactServiceImpl, ListServiceImpl, TagServiceImpl};
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Yonoma API client
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from a configuration
    ///
    /// # Errors
    /// `AppError::Transport` if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        debug!("Yonoma client ready for {}", http_client.base_url());
        Ok(Self { http_client })
    }

    /// Creates a client from environment variables (see [`Config::from_env`])
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Contact operations
    pub fn contacts(&self) -> ContactServiceImpl {
        ContactServiceImpl::new(self.http_client.clone())
    }

    /// List operations
    pub fn lists(&self) -> ListServiceImpl {
        ListServiceImpl::new(self.http_client.clone())
    }

    /// Tag operations
    pub fn tags(&self) -> TagServiceImpl {
        TagServiceImpl::new(self.http_client.clone())
    }

    /// Shared executor, for endpoints without a dedicated service method
    pub fn http_client(&self) -> Arc<HttpClient> {
        self.http_client.clone()
    }
}
