//! HTTP request handlers for API endpoints.

pub mod health;
pub mod messages;

pub use health::{cache_health_handler, db_health_handler, health_handler};
pub use messages::{create_message_handler, list_messages_handler};
