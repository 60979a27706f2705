/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Yonoma Client Prelude
//!
//! Brings the client, the configuration, the service traits and the request
//! models into scope with a single import.
//!
//! ```rust
//! use yonoma_client::prelude::*;
//!
//! let config = Config::new("my-api-key", PRODUCTION_BASE_URL);
//! let client = Client::new(config).unwrap();
//! let _tags = client.tags();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};
pub use crate::model::retry::RetryConfig;
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

pub use crate::application::client::Client;
pub use crate::application::services::{
    ContactService, ContactServiceImpl, ListService, ListServiceImpl, TagService,
    TagServiceImpl,
};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

pub use crate::model::http::{HttpClient, Payload};
pub use crate::model::requests::{
    ContactStatus, ContactStatusUpdate, ContactTag, ListRequest, NewContact, TagRequest,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::constants::*;
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
