//! PostgreSQL implementation of the message repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

use crate::domain::entities::{Message, NewMessage};
use crate::domain::repositories::MessageRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message::new(row.id, row.content, row.created_at)
    }
}

/// PostgreSQL repository for message storage.
///
/// `id` comes from a `BIGSERIAL` column and `created_at` defaults to `NOW()`,
/// so both are assigned by the database on insert.
pub struct PgMessageRepository {
    pool: Arc<PgPool>,
}

impl PgMessageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn list_all(&self) -> Result<Vec<Message>, AppError> {
        info!("Fetching all messages from database");

        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, content, created_at
            FROM messages
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        info!("Found {} messages", rows.len());
        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn insert(&self, new_message: NewMessage) -> Result<Message, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (content)
            VALUES ($1)
            RETURNING id, content, created_at
            "#,
        )
        .bind(&new_message.content)
        .fetch_one(self.pool.as_ref())
        .await?;

        info!("Message saved with ID: {}", row.id);
        Ok(row.into())
    }
}
