//! # Yonoma Client
//!
//! Async client for the [Yonoma](https://yonoma.io) marketing automation REST API.
//!
//! ## Features
//!
//! - Contacts: create, change subscription status, attach and detach tags
//! - Lists and tags: create, list, retrieve, update, delete
//! - One shared authenticated executor (`Authorization: Bearer <api key>`, JSON bodies)
//! - Explicit configuration: base URL, timeout and an opt-in retry policy for
//!   transport failures
//!
//! Payloads are any `serde::Serialize` value; responses are returned as the
//! decoded JSON object ([`model::http::Payload`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use yonoma_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new("my-api-key", PRODUCTION_BASE_URL))?;
//!
//!     let contact = NewContact::new("jane@example.com", ContactStatus::Subscribed)
//!         .with_data("firstName", "Jane");
//!     let created = client.contacts().create("list-id", &contact).await?;
//!     info!("created contact: {:?}", created);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`error::AppError`]: `Encoding` (payload not
//! serializable, nothing sent), `Transport`, `Api` (non-2xx status with the raw
//! body) or `Decoding` (body is not a JSON object).

/// Client facade, configuration and resource services
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// HTTP executor, request models and retry policy
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
