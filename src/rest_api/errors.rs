//! # REST API Errors
//!
//! Error types for the phonebook REST API, and the single place where
//! errors are turned into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Message returned when a new person's name is already taken
pub const DUPLICATE_NAME: &str = "name must be unique";

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request failed a business rule
    #[error("{0}")]
    Validation(String),

    /// Path id is not a valid store key
    #[error("malformatted id")]
    MalformattedId,

    /// Well-formed id with no record behind it
    #[error("Resource not found")]
    NotFound,

    /// No route matched the request
    #[error("unknown endpoint")]
    UnknownEndpoint,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure this layer does not know how to explain
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    pub fn validation(message: impl Into<String>) -> Self {
        RestError::Validation(message.into())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::MalformattedId => StatusCode::BAD_REQUEST,
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::UnknownEndpoint => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the response carries an `{error}` body
    fn has_body(&self) -> bool {
        !matches!(self, RestError::NotFound | RestError::Internal(_))
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Cast(_) => RestError::MalformattedId,
            StoreError::Validation(message) => RestError::Validation(message),
            StoreError::DuplicateName(_) => RestError::validation(DUPLICATE_NAME),
            StoreError::Backend(message) => RestError::Internal(message),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            RestError::Internal(message) => {
                Logger::error("STORE_FAILURE", &[("message", message.as_str())]);
            }
            other => Logger::debug(
                "REQUEST_REJECTED",
                &[("status", status.as_str()), ("error", other.to_string().as_str())],
            ),
        }

        if self.has_body() {
            let body = Json(ErrorResponse {
                error: self.to_string(),
            });
            (status, body).into_response()
        } else {
            status.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::validation("name is missing").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::MalformattedId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RestError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(RestError::UnknownEndpoint.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RestError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_translation() {
        assert_eq!(
            RestError::from(StoreError::Cast("1".to_string())),
            RestError::MalformattedId
        );
        assert_eq!(
            RestError::from(StoreError::Validation("number is missing".to_string())),
            RestError::validation("number is missing")
        );
        assert_eq!(
            RestError::from(StoreError::DuplicateName("Arto Hellas".to_string())),
            RestError::validation(DUPLICATE_NAME)
        );
        assert!(matches!(
            RestError::from(StoreError::Backend("down".to_string())),
            RestError::Internal(_)
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RestError::MalformattedId.to_string(), "malformatted id");
        assert_eq!(RestError::UnknownEndpoint.to_string(), "unknown endpoint");
    }

    #[test]
    fn test_not_found_has_no_body() {
        assert!(!RestError::NotFound.has_body());
        assert!(RestError::UnknownEndpoint.has_body());
    }
}
