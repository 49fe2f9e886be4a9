//! Application error taxonomy and its HTTP mapping.
//!
//! Every variant maps to exactly one status code. Responses never carry an
//! error body: clients infer the failure reason from the status alone.
//!
//! | Variant              | Status |
//! |----------------------|--------|
//! | `MethodNotAllowed`   | 405    |
//! | `MalformedPayload`   | 400    |
//! | `InvalidId`          | 400    |
//! | `NotFound`           | 404    |
//! | `Storage`            | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Wrong HTTP verb for the route.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Request body is not well-formed JSON for a user.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Path segment could not be parsed as an integer id.
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    /// Operation target does not exist in the store.
    #[error("user {id} not found")]
    NotFound { id: i64 },

    /// Underlying query or statement failed.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }

    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId(raw.into())
    }

    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedPayload(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Storage(e) => tracing::error!(error = %e, "storage operation failed"),
            AppError::NotFound { id } => tracing::debug!(id, "user not found"),
            other => tracing::debug!(error = %other, "rejected request"),
        }

        status.into_response()
    }
}
