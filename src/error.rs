/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
//! Error type shared by the executor and every resource service.

use reqwest::StatusCode;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request payload could not be serialized to JSON
    Encoding(serde_json::Error),
    /// The request never produced a response (DNS, refused connection, timeout, ...)
    Transport(reqwest::Error),
    /// The server answered with a status outside `200..300`
    Api {
        /// Status code returned by the server
        status: StatusCode,
        /// Response body exactly as received, not parsed or transcoded
        body: Vec<u8>,
    },
    /// The response body is not a valid JSON object
    Decoding(serde_json::Error),
    /// A required configuration value is missing or invalid
    Config(String),
}

impl AppError {
    /// Status code of an `Api` error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body bytes of an `Api` error
    pub fn body_bytes(&self) -> Option<&[u8]> {
        match self {
            AppError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Body of an `Api` error as text, invalid UTF-8 replaced
    pub fn body(&self) -> Option<Cow<'_, str>> {
        self.body_bytes().map(String::from_utf8_lossy)
    }

    /// True when the request never reached the server (connect failure).
    ///
    /// Timeouts are excluded: the server may already have acted on the request.
    pub fn is_retryable_transport(&self) -> bool {
        match self {
            AppError::Transport(e) => e.is_connect(),
            _ => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Encoding(e) => write!(f, "encoding error: {e}"),
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::Api { status, body } => {
                write!(f, "api error ({status}): {}", String::from_utf8_lossy(body))
            }
            AppError::Decoding(e) => write!(f, "decoding error: {e}"),
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Encoding(e) | AppError::Decoding(e) => Some(e),
            AppError::Transport(e) => Some(e),
            AppError::Api { .. } | AppError::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e)
    }
}
