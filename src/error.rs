//! Error types for the Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type.
///
/// Domain errors are a closed set so the boundary layer can match on kind;
/// anything else falls into `Database` or `Internal` and is surfaced as a
/// generic fault.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Not available: {0}")]
    NotAvailable(String),

    #[error("Already available: {0}")]
    AlreadyAvailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::AlreadyExists(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::NotAvailable(msg) => (StatusCode::CONFLICT, msg.clone()),
            // Returning an already-available book is deliberately a generic
            // fault, not 409 like the checkout conflict; see DESIGN.md.
            AppError::AlreadyAvailable(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_status_codes() {
        let cases = [
            (
                AppError::Validation("title is required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::BadRequest("invalid date format".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound("book not found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::AlreadyExists("book already exists".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::NotAvailable("book is not available".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::AlreadyAvailable("book is already available".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
