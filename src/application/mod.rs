//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::message_cache::MessageCache`] - Read-through cache for the message list
//! - [`services::message_service::MessageService`] - Message listing and creation

pub mod services;
