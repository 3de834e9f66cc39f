//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_ledger::LedgerError;
use infra_db::DatabaseError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal server error: {0}")]
    Internal(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "unauthorized".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg.clone())
            }
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ApiError::NotFound(msg),
            DatabaseError::DuplicateEntry(msg) => ApiError::Conflict(msg),
            DatabaseError::ForeignKeyViolation(msg) | DatabaseError::ConstraintViolation(msg) => {
                ApiError::Validation(msg)
            }
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation { .. } => ApiError::Validation(err.to_string()),
            LedgerError::CustomerNotFound(_) => ApiError::NotFound(err.to_string()),
            LedgerError::EmptyStatement | LedgerError::InvertedPeriod | LedgerError::MissingPhone => {
                ApiError::Validation(err.to_string())
            }
            LedgerError::Money(_) => ApiError::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_validation_maps_to_422() {
        let err: ApiError = LedgerError::validation("amount", "must be positive").into();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_database_not_found_maps_to_404() {
        let err: ApiError = DatabaseError::not_found("Customer", "CUST-1").into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
