//! Core domain entities.
//!
//! - [`Message`] - A stored message board entry
//! - [`NewMessage`] - Input for creating a message (no id yet)

pub mod message;

pub use message::{Message, NewMessage};
