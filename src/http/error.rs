//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "<message>"}` JSON bodies with the
//! matching status code. Database and hashing failures are logged with
//! their detail and surfaced as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing or empty (400)
    Validation(&'static str),

    /// Duplicate resource (400)
    Duplicate(&'static str),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Credential mismatch (401)
    Unauthorized(&'static str),

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, (*msg).to_owned()),
            Self::Duplicate(msg) => (StatusCode::BAD_REQUEST, (*msg).to_owned()),
            Self::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{resource} not found"))
            }
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, (*msg).to_owned()),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_owned(),
                )
            }
            Self::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::Duplicate(msg) => Self::Duplicate(msg),
            e @ DbError::Sqlx(_) => Self::Database(e),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("bcrypt failure: {e}"))
    }
}
