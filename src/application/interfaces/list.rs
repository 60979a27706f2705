use crate::error::AppError;
use crate::model::http::Payload;
use async_trait::async_trait;
use serde::Serialize;

/// Interface for the list service
#[async_trait]
pub trait ListService: Send + Sync {
    /// Creates a list (`POST lists/create`)
    async fn create<B>(&self, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;

    /// Lists all lists (`GET lists/list`)
    async fn list(&self) -> Result<Payload, AppError>;

    /// Gets one list (`GET lists/{list_id}`)
    async fn retrieve(&self, list_id: &str) -> Result<Payload, AppError>;

    /// Updates a list (`POST lists/{list_id}/update`)
    async fn update<B>(&self, list_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;

    /// Deletes a list (`POST lists/{list_id}/delete`, no body)
    async fn delete(&self, list_id: &str) -> Result<Payload, AppError>;
}
