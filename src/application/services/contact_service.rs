/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::interfaces::contact::ContactService;
use crate::error::AppError;
use crate::model::http::{HttpClient, Payload};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Implementation of the contact service
#[derive(Debug, Clone)]
pub struct ContactServiceImpl {
    client: Arc<HttpClient>,
}

impl ContactServiceImpl {
    /// Creates a new instance of the contact service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create<B>(&self, group_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Creating contact in list {}", group_id);
        let path = format!("contacts/{group_id}/create");
        self.client.post(&path, payload).await
    }

    async fn update<B>(
        &self,
        group_id: &str,
        contact_id: &str,
        payload: &B,
    ) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Updating status of contact {} in list {}", contact_id, group_id);
        let path = format!("contacts/{group_id}/status/{contact_id}");
        self.client.post(&path, payload).await
    }

    async fn add_tag<B>(&self, contact_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Adding tag to contact {}", contact_id);
        let path = format!("contacts/tags/{contact_id}/add");
        self.client.post(&path, payload).await
    }

    async fn remove_tag<B>(&self, contact_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized,
    {
        info!("Removing tag from contact {}", contact_id);
        let path = format!("contacts/tags/{contact_id}/remove");
        self.client.post(&path, payload).await
    }
}
