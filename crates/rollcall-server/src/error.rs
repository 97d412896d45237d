//! Error types for the HTTP layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Client
//! mistakes become `400` with a specific message; storage failures become
//! a generic `500` and are logged with their cause.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rollcall_db::DbError;
use rollcall_types::NameError;

/// Errors that can occur while handling an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The submitted name was empty after trimming.
    #[error("Name is required")]
    EmptyName,

    /// The submitted name is already on the roster.
    #[error("Name already registered")]
    DuplicateName(String),

    /// The request body could not be parsed.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(DbError),
}

impl From<NameError> for ApiError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::Empty => Self::EmptyName,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateName(name) => Self::DuplicateName(name),
            other => Self::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::EmptyName | Self::DuplicateName(_) | Self::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Storage(e) => {
                tracing::error!(error = %e, "Storage operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, String::from("Server error"))
            }
        };

        let body = serde_json::json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
