//! Message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message stored on the board.
///
/// Messages are immutable once created. The serde derives define the encoding
/// used for the cached message list; the API response shape lives in
/// [`crate::api::dto::message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a new Message instance.
    pub fn new(id: i64, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            created_at,
        }
    }
}

/// Input data for creating a new message.
///
/// The store assigns `id` and `created_at` on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub content: String,
}

impl NewMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns true if the content is empty or whitespace only.
    ///
    /// Any Unicode whitespace counts, including non-breaking spaces.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let now = Utc::now();
        let message = Message::new(1, "hello".to_string(), now);

        assert_eq!(message.id, 1);
        assert_eq!(message.content, "hello");
        assert_eq!(message.created_at, now);
    }

    #[test]
    fn test_new_message_blank_detection() {
        assert!(NewMessage::new("").is_blank());
        assert!(NewMessage::new("   ").is_blank());
        assert!(NewMessage::new("\t\n").is_blank());
        assert!(!NewMessage::new(" hi ").is_blank());
    }

    #[test]
    fn test_unicode_whitespace_is_blank() {
        assert!(NewMessage::new("\u{00A0}").is_blank());
        assert!(NewMessage::new("\u{2003} \u{3000}").is_blank());
        assert!(!NewMessage::new("\u{00A0}x").is_blank());
    }

    #[test]
    fn test_message_cache_encoding_is_stable() {
        let message = Message::new(7, "cached".to_string(), Utc::now());

        let encoded = serde_json::to_string(&vec![message.clone()]).unwrap();
        let decoded: Vec<Message> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, vec![message]);
    }
}
