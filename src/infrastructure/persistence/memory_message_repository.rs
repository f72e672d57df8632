//! In-process message repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Message, NewMessage};
use crate::domain::repositories::MessageRepository;
use crate::error::AppError;

/// Message store kept in memory.
///
/// Ids are assigned sequentially starting at 1. Contents are lost on restart;
/// the server only falls back to this store when no database is configured.
#[derive(Default)]
pub struct MemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl MemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    async fn list_all(&self) -> Result<Vec<Message>, AppError> {
        Ok(self.messages.read().await.clone())
    }

    async fn insert(&self, new_message: NewMessage) -> Result<Message, AppError> {
        let mut messages = self.messages.write().await;
        let id = messages.last().map_or(1, |last| last.id + 1);
        let message = Message::new(id, new_message.content, Utc::now());
        messages.push(message.clone());
        Ok(message)
    }
}
