use crate::error::AppError;
use crate::model::http::Payload;
use async_trait::async_trait;
use serde::Serialize;

/// Interface for the tag service
#[async_trait]
pub trait TagService: Send + Sync {
    /// Creates a tag (`POST tags/create`)
    async fn create<B>(&self, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;

    /// Lists all tags (`GET tags/list`)
    async fn list(&self) -> Result<Payload, AppError>;

    /// Gets one tag (`GET tags/{tag_id}`)
    async fn retrieve(&self, tag_id: &str) -> Result<Payload, AppError>;

    /// Updates a tag (`POST tags/{tag_id}/update`)
    async fn update<B>(&self, tag_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;

    /// Deletes a tag (`POST tags/{tag_id}/delete`, no body)
    async fn delete(&self, tag_id: &str) -> Result<Payload, AppError>;
}
