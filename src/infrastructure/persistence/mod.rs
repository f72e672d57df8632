//! Message store implementations.
//!
//! # Repositories
//!
//! - [`PgMessageRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryMessageRepository`] - In-process storage used when no database is configured

pub mod memory_message_repository;
pub mod pg_message_repository;

pub use memory_message_repository::MemoryMessageRepository;
pub use pg_message_repository::PgMessageRepository;
