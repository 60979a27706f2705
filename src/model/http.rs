/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error};

/// Untyped JSON object used for request and response bodies
pub type Payload = Map<String, Value>;

const APPLICATION_JSON: &str = "application/json";

/// Authenticated request executor for the Yonoma API
///
/// Every resource service goes through this type. It holds the immutable
/// configuration and one reusable `reqwest::Client`, so it can be shared
/// behind an `Arc` and called concurrently.
#[derive(Debug)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates an executor from a configuration
    ///
    /// # Errors
    /// `AppError::Transport` if the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Configuration this executor was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL endpoint paths are appended to
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Makes a GET request without body
    pub async fn get(&self, path: &str) -> Result<Payload, AppError> {
        self.request::<()>(Method::GET, path, None).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Payload, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a POST request without body
    pub async fn post_empty(&self, path: &str) -> Result<Payload, AppError> {
        self.request::<()>(Method::POST, path, None).await
    }

    /// Makes a DELETE request without body
    pub async fn delete(&self, path: &str) -> Result<Payload, AppError> {
        self.request::<()>(Method::DELETE, path, None).await
    }

    /// Sends `method` to `base_url + path` and returns the response JSON object
    ///
    /// # Errors
    /// * `AppError::Encoding` - `body` could not be serialized; nothing was sent
    /// * `AppError::Transport` - no response was received
    /// * `AppError::Api` - status outside `200..300`, with the body bytes untouched
    /// * `AppError::Decoding` - the body is not a JSON object
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Payload, AppError> {
        self.request_as(method, path, body).await
    }

    /// Same as [`HttpClient::request`] but decodes the body into any `T`
    pub async fn request_as<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(AppError::Encoding)?;

        let url = format!("{}{}", self.config.rest_api.base_url, path);

        let raw = make_http_request(
            &self.http_client,
            &self.config.credentials.api_key,
            method,
            &url,
            body,
            self.config.retry,
        )
        .await?;

        serde_json::from_slice(&raw).map_err(|e| {
            error!("Failed to decode response from {}: {}", url, e);
            AppError::Decoding(e)
        })
    }
}

/// Sends one authenticated request and returns the raw body of a 2xx answer
///
/// Connect failures are retried according to `retry_config`; any other
/// outcome, timeouts included, is returned as-is.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `api_key` - Bearer token for the `Authorization` header
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `body` - Already serialized JSON body, if any
/// * `retry_config` - Retry policy for connect failures
pub async fn make_http_request(
    client: &Client,
    api_key: &str,
    method: Method,
    url: &str,
    body: Option<Vec<u8>>,
    retry_config: RetryConfig,
) -> Result<Vec<u8>, AppError> {
    retry_config
        .run(|| send_once(client, api_key, method.clone(), url, body.clone()))
        .await
}

async fn send_once(
    client: &Client,
    api_key: &str,
    method: Method,
    url: &str,
    body: Option<Vec<u8>>,
) -> Result<Vec<u8>, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .bearer_auth(api_key)
        .header(ACCEPT, APPLICATION_JSON);

    if let Some(bytes) = body {
        request = request.header(CONTENT_TYPE, APPLICATION_JSON).body(bytes);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.bytes().await?.to_vec();

    if !status.is_success() {
        error!(
            "Request failed with status {}: {}",
            status,
            String::from_utf8_lossy(&body)
        );
        return Err(AppError::Api { status, body });
    }

    Ok(body)
}
