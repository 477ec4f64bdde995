use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::DomainError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::Validation(_) => Self::bad_request(message),
            DomainError::DuplicateEntity { .. } => Self::conflict(message),
            DomainError::NotFound { .. } => Self::not_found(message),
            DomainError::Repository(_) => Self::internal_server_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::from(DomainError::validation("blank name"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_maps_to_409() {
        let err = ApiError::from(DomainError::duplicate("tournament", "Cup A"));
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert!(err.message.contains("Cup A"));
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(DomainError::not_found("team", 7));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn repository_maps_to_500() {
        let err = ApiError::from(DomainError::Repository("boom".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
