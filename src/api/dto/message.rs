//! DTOs for the message endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::application::services::message_service::EMPTY_CONTENT_MESSAGE;
use crate::domain::entities::Message;

/// Request body for `POST /api/messages`.
///
/// A missing or `null` `content` field deserializes to an empty string so that
/// it is rejected with the same 400 response as blank content.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Blank means empty after `str::trim`, which strips every Unicode whitespace
// character (so a lone U+00A0 is blank too).
fn validate_not_blank(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(EMPTY_CONTENT_MESSAGE.into()));
    }
    Ok(())
}

/// A message as returned by the API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_content_fails_validation() {
        for content in ["", "  ", "\t"] {
            let request = CreateMessageRequest {
                content: content.to_string(),
            };
            assert!(request.validate().is_err());
        }
    }

    #[test]
    fn test_missing_content_defaults_to_empty() {
        let request: CreateMessageRequest = serde_json::from_value(json!({})).unwrap();

        assert_eq!(request.content, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_null_content_defaults_to_empty() {
        let request: CreateMessageRequest =
            serde_json::from_value(json!({ "content": null })).unwrap();

        assert_eq!(request.content, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unicode_whitespace_is_blank() {
        for content in ["\u{00A0}", "\u{2003}\u{3000}", "\n\r"] {
            let request = CreateMessageRequest {
                content: content.to_string(),
            };
            assert!(request.validate().is_err());
        }

        let request = CreateMessageRequest {
            content: "\u{00A0}hi\u{00A0}".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = MessageResponse::from(Message::new(1, "hello".to_string(), Utc::now()));

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["content"], "hello");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
