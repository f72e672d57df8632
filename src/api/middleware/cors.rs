//! Cross-origin resource sharing.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allows the browser frontend to call the API from any origin.
///
/// Credentials are not used by the API, so a wildcard origin is safe here.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
