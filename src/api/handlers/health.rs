//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{CacheHealthResponse, DbHealthResponse, HealthResponse};
use crate::state::AppState;

/// Liveness probe. Always succeeds while the process serves requests.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// { "status": "OK", "timestamp": "1735732800000" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().timestamp_millis().to_string(),
    })
}

/// Checks database connectivity by counting stored messages.
///
/// # Endpoint
///
/// `GET /api/health/db`
///
/// # Response Codes
///
/// - **200 OK**: `{ "status": "OK", "database": "connected", "message_count": 3 }`
/// - **503 Service Unavailable**:
///   `{ "status": "ERROR", "database": "disconnected", "error": "..." }`
pub async fn db_health_handler(
    State(state): State<AppState>,
) -> Result<Json<DbHealthResponse>, (StatusCode, Json<DbHealthResponse>)> {
    match state.message_service.count_messages().await {
        Ok(count) => Ok(Json(DbHealthResponse {
            status: "OK".to_string(),
            database: "connected".to_string(),
            message_count: Some(count),
            error: None,
        })),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DbHealthResponse {
                    status: "ERROR".to_string(),
                    database: "disconnected".to_string(),
                    message_count: None,
                    error: Some(e.detail()),
                }),
            ))
        }
    }
}

/// Checks that the cache backend answers.
///
/// A failing cache does not affect the message endpoints (they fall back to
/// the database), so this is reported separately from `/api/health/db`.
///
/// # Endpoint
///
/// `GET /api/health/cache`
///
/// # Response Codes
///
/// - **200 OK**: `{ "status": "OK", "cache": "redis" }`
/// - **503 Service Unavailable**:
///   `{ "status": "ERROR", "cache": "redis", "error": "..." }`
pub async fn cache_health_handler(
    State(state): State<AppState>,
) -> Result<Json<CacheHealthResponse>, (StatusCode, Json<CacheHealthResponse>)> {
    let backend = state.message_service.cache_backend().to_string();

    if state.message_service.cache_healthy().await {
        Ok(Json(CacheHealthResponse {
            status: "OK".to_string(),
            cache: backend,
            error: None,
        }))
    } else {
        tracing::warn!("Cache health check failed ({})", backend);
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(CacheHealthResponse {
                status: "ERROR".to_string(),
                cache: backend,
                error: Some("Cache backend is not responding".to_string()),
            }),
        ))
    }
}
