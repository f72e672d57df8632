//! Handlers for listing and creating messages.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::message::{CreateMessageRequest, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every message on the board.
///
/// # Endpoint
///
/// `GET /api/messages`
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "content": "hello", "createdAt": "2025-01-01T12:00:00Z" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 500 with `{ "error": "Failed to fetch messages", "message": "..." }`
/// if the message store fails.
pub async fn list_messages_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    tracing::info!("GET /api/messages - Fetching messages");

    let messages = state
        .message_service
        .list_messages()
        .await
        .map_err(|e| e.context("Failed to fetch messages"))?;

    tracing::info!("GET /api/messages - Success, found {} messages", messages.len());
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Creates a message.
///
/// # Endpoint
///
/// `POST /api/messages`
///
/// # Request Body
///
/// ```json
/// { "content": "hello" }
/// ```
///
/// # Errors
///
/// - 400 with `{ "error": "Message content cannot be empty" }` if `content` is
///   missing, empty or whitespace only
/// - 500 with `{ "error": "Failed to create message", "message": "..." }` if
///   the insert fails
pub async fn create_message_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::info!("POST /api/messages - Creating message: {}", payload.content);
    payload.validate()?;

    let saved = state
        .message_service
        .create_message(payload.content)
        .await
        .map_err(|e| e.context("Failed to create message"))?;

    tracing::info!("POST /api/messages - Success, message saved with ID: {}", saved.id);
    Ok(Json(saved.into()))
}
