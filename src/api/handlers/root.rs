//! Liveness probe.

use axum::http::StatusCode;

/// Answers every request with an empty 200.
///
/// # Endpoint
///
/// `/` (any method)
pub async fn root_handler() -> StatusCode {
    StatusCode::OK
}
