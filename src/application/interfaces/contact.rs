use crate::error::AppError;
use crate::model::http::Payload;
use async_trait::async_trait;
use serde::Serialize;

/// Interface for the contact service
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Creates a contact in the list `group_id`
    ///
    /// `POST contacts/{group_id}/create`
    async fn create<B>(&self, group_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;

    /// Updates the subscription status of a contact in the list `group_id`
    ///
    /// `POST contacts/{group_id}/status/{contact_id}`
    async fn update<B>(
        &self,
        group_id: &str,
        contact_id: &str,
        payload: &B,
    ) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;

    /// Attaches a tag to a contact
    ///
    /// `POST contacts/tags/{contact_id}/add`
    async fn add_tag<B>(&self, contact_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;

    /// Detaches a tag from a contact
    ///
    /// `POST contacts/tags/{contact_id}/remove`
    async fn remove_tag<B>(&self, contact_id: &str, payload: &B) -> Result<Payload, AppError>
    where
        B: Serialize + Sync + ?Sized;
}
