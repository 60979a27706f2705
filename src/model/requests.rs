/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
//! Typed bodies for the documented write endpoints.
//!
//! Every service method accepts any `Serialize` value, so a plain
//! [`Payload`](crate::model::http::Payload) works just as well. These types only
//! spell out the fields the API documents.

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Subscription status of a contact
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    /// Receives campaigns
    Subscribed,
    /// Opted out
    Unsubscribed,
}

/// Body for creating a contact in a list
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContact {
    /// Contact email address
    pub email: String,
    /// Initial subscription status
    pub status: ContactStatus,
    /// Free-form contact attributes (`firstName`, `lastName`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl NewContact {
    /// Create a contact body with no extra attributes
    pub fn new(email: impl Into<String>, status: ContactStatus) -> Self {
        Self {
            email: email.into(),
            status,
            data: None,
        }
    }

    /// Add one attribute to `data`
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Body for changing a contact's subscription status
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactStatusUpdate {
    /// New status
    pub status: ContactStatus,
}

impl From<ContactStatus> for ContactStatusUpdate {
    fn from(status: ContactStatus) -> Self {
        Self { status }
    }
}

/// Body for attaching a tag to, or detaching it from, a contact
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTag {
    /// Tag identifier
    pub tag_id: String,
}

impl ContactTag {
    /// Reference the tag `tag_id`
    pub fn new(tag_id: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
        }
    }
}

/// Body for creating or renaming a list
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// List name
    pub list_name: String,
}

impl ListRequest {
    /// List body named `list_name`
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
        }
    }
}

/// Body for creating or renaming a tag
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRequest {
    /// Tag name
    pub tag_name: String,
}

impl TagRequest {
    /// Tag body named `tag_name`
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}
