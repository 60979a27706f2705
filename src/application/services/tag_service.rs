/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::tag::TagService;
use crate::error::AppError;
use crate::model::http::{HttpClient, Payload};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the tag service
#[derive(Debug, Clone)]
pub struct TagServiceImpl {
    client: Arc<HttpClient>,
}

impl TagServiceImpl {
    /// Creates a new instance of the tag service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TagService for TagServiceImpl {
    async fn create<B>(&self, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Creating tag");
        self.client.post("tags/create", payload).await
    }

    async fn list(&self) -> Result<Payload, AppError> {
        debug!("Getting all tags");
        self.client.get("tags/list").await
    }

    async fn retrieve(&self, tag_id: &str) -> Result<Payload, AppError> {
        debug!("Getting tag {}", tag_id);
        self.client.get(&format!("tags/{tag_id}")).await
    }

    async fn update<B>(&self, tag_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Updating tag {}", tag_id);
        self.client
            .post(&format!("tags/{tag_id}/update"), payload)
            .await
    }

    async fn delete(&self, tag_id: &str) -> Result<Payload, AppError> {
        info!("Deleting tag {}", tag_id);
        self.client
            .post_empty(&format!("tags/{tag_id}/delete"))
            .await
    }
}
