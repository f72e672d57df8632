//! DTOs for health check endpoints.

use serde::Serialize;

/// Liveness response for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Milliseconds since the Unix epoch, as a string.
    pub timestamp: String,
}

/// Database check response for `GET /api/health/db`.
#[derive(Debug, Serialize)]
pub struct DbHealthResponse {
    pub status: String,
    pub database: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Cache check response for `GET /api/health/cache`.
#[derive(Debug, Serialize)]
pub struct CacheHealthResponse {
    pub status: String,
    pub cache: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
