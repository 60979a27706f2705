/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::list::ListService;
use crate::error::AppError;
use crate::model::http::{HttpClient, Payload};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the list service
#[derive(Debug, Clone)]
pub struct ListServiceImpl {
    client: Arc<HttpClient>,
}

impl ListServiceImpl {
    /// Creates a new instance of the list service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListService for ListServiceImpl {
    async fn create<B>(&self, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Creating list");
        self.client.post("lists/create", payload).await
    }

    async fn list(&self) -> Result<Payload, AppError> {
        debug!("Getting all lists");
        self.client.get("lists/list").await
    }

    async fn retrieve(&self, list_id: &str) -> Result<Payload, AppError> {
        debug!("Getting list {}", list_id);
        self.client.get(&format!("lists/{list_id}")).await
    }

    async fn update<B>(&self, list_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Updating list {}", list_id);
        self.client
            .post(&format!("lists/{list_id}/update"), payload)
            .await
    }

    async fn delete(&self, list_id: &str) -> Result<Payload, AppError> {
        info!("Deleting list {}", list_id);
        self.client
            .post_empty(&format!("lists/{list_id}/delete"))
            .await
    }
}
