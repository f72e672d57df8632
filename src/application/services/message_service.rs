//! Message listing and creation service.

use std::sync::Arc;

use tracing::info;

use crate::application::services::MessageCache;
use crate::domain::entities::{Message, NewMessage};
use crate::domain::repositories::MessageRepository;
use crate::error::AppError;

/// Error message returned when a message has no visible content.
pub const EMPTY_CONTENT_MESSAGE: &str = "Message content cannot be empty";

/// Service for reading and posting messages.
///
/// Reads go through the [`MessageCache`]; writes go to the repository and then
/// invalidate the cache before returning, so the writer's next read sees its
/// own message.
pub struct MessageService<R: MessageRepository + ?Sized> {
    repository: Arc<R>,
    cache: MessageCache<R>,
}

impl<R: MessageRepository + ?Sized> MessageService<R> {
    /// Creates a new message service.
    ///
    /// `cache` should wrap the same repository; the service writes to
    /// `repository` directly and only reads through `cache`.
    pub fn new(repository: Arc<R>, cache: MessageCache<R>) -> Self {
        Self { repository, cache }
    }

    /// Returns every message in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on a cache miss if the store fails.
    pub async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        let messages = self.cache.get().await?;
        info!("Listing {} messages", messages.len());
        Ok(messages)
    }

    /// Validates and stores a new message, then invalidates the cached list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `content` is empty or whitespace;
    /// neither the store nor the cache is touched in that case.
    ///
    /// Returns [`AppError::Storage`] if the insert fails. The cache is left as
    /// is because nothing was written.
    pub async fn create_message(&self, content: String) -> Result<Message, AppError> {
        let new_message = NewMessage::new(content);
        if new_message.is_blank() {
            return Err(AppError::bad_request(EMPTY_CONTENT_MESSAGE));
        }

        info!("Saving message: {}", new_message.content);
        let saved = self.repository.insert(new_message).await?;
        self.cache.invalidate().await;
        info!("Message saved successfully with ID: {}", saved.id);

        Ok(saved)
    }

    /// Counts stored messages by querying the repository directly.
    ///
    /// Bypasses the cache so that health checks exercise the database.
    pub async fn count_messages(&self) -> Result<usize, AppError> {
        Ok(self.repository.list_all().await?.len())
    }

    /// Checks whether the cache store is reachable.
    pub async fn cache_healthy(&self) -> bool {
        self.cache.health_check().await
    }

    /// Name of the installed cache backend.
    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend()
    }
}
