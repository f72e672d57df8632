//! API route configuration.

use crate::api::handlers::{
    cache_health_handler, create_message_handler, db_health_handler, health_handler,
    list_messages_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /messages`      - List all messages (cached)
/// - `POST /messages`      - Create a message
/// - `GET  /health`        - Liveness probe
/// - `GET  /health/db`     - Database connectivity and message count
/// - `GET  /health/cache`  - Cache backend connectivity
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/messages",
            get(list_messages_handler).post(create_message_handler),
        )
        .route("/health", get(health_handler))
        .route("/health/db", get(db_health_handler))
        .route("/health/cache", get(cache_health_handler))
}
