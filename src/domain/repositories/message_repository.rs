//! Repository trait for message storage.

use crate::domain::entities::{Message, NewMessage};
use crate::error::AppError;
use async_trait::async_trait;

/// The durable store behind the message board.
///
/// The contract is deliberately narrow: the cache layer only needs to read the
/// whole collection and the write path only needs to append.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMessageRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMessageRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Returns every stored message ordered by id (insertion order).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store is unreachable or the query fails.
    async fn list_all(&self) -> Result<Vec<Message>, AppError>;

    /// Persists a message and returns it with its assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the insert fails.
    async fn insert(&self, new_message: NewMessage) -> Result<Message, AppError>;
}
