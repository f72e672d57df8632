//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod message_repository;

pub use message_repository::MessageRepository;

#[cfg(test)]
pub use message_repository::MockMessageRepository;
