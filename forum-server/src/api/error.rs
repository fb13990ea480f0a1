use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forum_types::ErrorResponse;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input; nothing was written
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A referenced entity does not exist; nothing was written
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller already did this (duplicate subscription or upvote)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected storage failure; detail is logged, never returned
    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            ApiError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Database error".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: message.to_string(),
            details: Some(details),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Database(format!("{:#}", err))
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_storage_errors_become_database_errors() {
        let err: ApiError = anyhow::anyhow!("disk I/O error").context("Failed to insert upvote").into();
        match err {
            ApiError::Database(msg) => {
                assert!(msg.contains("Failed to insert upvote"));
                assert!(msg.contains("disk I/O error"));
            }
            other => panic!("expected database error, got {other:?}"),
        }
    }
}
