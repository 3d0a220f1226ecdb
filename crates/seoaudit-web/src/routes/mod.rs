//! Route handlers.

pub mod density;
pub mod signals;

use axum::http::StatusCode;

/// OPTIONS - Bare preflight answer; CORS headers are added by the layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
