//! Centralized API error handling
//!
//! Maps failures to HTTP status codes and renders every error body as
//! `{"error": "<message>"}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::user::RepositoryError;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed id or request body
    #[error("{0}")]
    ValidationError(String),

    /// Zero-row single-record lookup
    #[error("{0}")]
    NotFound(String),

    /// Any other database failure, message passed through verbatim
    #[error("{0}")]
    QueryError(String),
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::QueryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match &self {
            ApiError::QueryError(_) => {
                tracing::error!(error = %message, status = %status.as_u16(), "Server error occurred");
            }
            _ => {
                tracing::debug!(error = %message, status = %status.as_u16(), "Client error occurred");
            }
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::NotFound("User not found".to_string()),
            RepositoryError::Query(e) => ApiError::QueryError(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!(error = %err.body_text(), "Rejected request body");
        ApiError::ValidationError("Invalid request payload".to_string())
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;
