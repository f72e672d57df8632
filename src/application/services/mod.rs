//! Business logic services for the application layer.

pub mod message_cache;
pub mod message_service;

pub use message_cache::MessageCache;
pub use message_service::MessageService;
