//! Application error type and its HTTP mapping.
//!
//! Every fallible boundary (validation, storage, serialization) returns
//! [`AppError`]. Cache failures never show up here: they are handled inside
//! [`crate::infrastructure::cache`] and degrade to pass-through reads.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error body returned by the API.
///
/// Validation failures only carry `error`; server failures carry a summary in
/// `error` and the underlying cause in `message`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Request rejected before reaching storage or cache.
    #[error("{message}")]
    Validation { message: String },

    /// The message store could not serve the request.
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// A failure annotated with the operation that was being performed.
    #[error("{summary}: {source}")]
    Failed {
        summary: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Attaches an operation summary to server-side failures.
    ///
    /// Validation errors are returned unchanged so they keep their 400 status
    /// and body.
    pub fn context(self, summary: &'static str) -> Self {
        match self {
            Self::Validation { .. } => self,
            Self::Failed { source, .. } => Self::Failed { summary, source },
            other => Self::Failed {
                summary,
                source: Box::new(other),
            },
        }
    }

    /// Returns true for errors caused by the client's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The innermost human-readable cause, without summaries.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Storage { message } => message.clone(),
            Self::Internal { message } => message.clone(),
            Self::Failed { source, .. } => source.detail(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON body for this error.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::Validation { message } => ErrorBody {
                error: message.clone(),
                message: None,
            },
            Self::Storage { message } => ErrorBody {
                error: "Storage error".to_string(),
                message: Some(message.clone()),
            },
            Self::Internal { message } => ErrorBody {
                error: "Internal server error".to_string(),
                message: Some(message.clone()),
            },
            Self::Failed { summary, source } => ErrorBody {
                error: (*summary).to_string(),
                message: Some(source.detail()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(self.to_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::internal(format!("Serialization failed: {}", e))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());
        Self::bad_request(message)
    }
}
