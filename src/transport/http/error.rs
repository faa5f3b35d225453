//! HTTP error type and its mapping to status codes and `{"detail": ...}` bodies.

use crate::domain::{FieldError, ValidationError};
use crate::storage::StoreError;
use crate::transport::http::types::{ErrorResponse, PRODUCT_NOT_FOUND};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload failed schema validation.
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Body or path could not be parsed at all.
    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    /// Resource already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        HttpError::Validation(err.errors)
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => HttpError::NotFound(PRODUCT_NOT_FOUND.to_string()),
            e @ StoreError::DuplicateId(_) => HttpError::Conflict(e.to_string()),
            StoreError::Database(e) => {
                error!(error = %e, "storage operation failed");
                HttpError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::Value::from(msg)),
            HttpError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::to_value(errors).unwrap_or_default(),
            ),
            HttpError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, serde_json::Value::from(msg))
            }
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, serde_json::Value::from(msg)),
            HttpError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, serde_json::Value::from(msg))
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
