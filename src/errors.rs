//! Service error taxonomy and the uniform JSON error envelope.
//!
//! Every error leaving the service is rendered as
//! `{"success": false, "error": <status>, "message": <string>}` with a fixed
//! status code per kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

use crate::db::errors::DbError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested resource not found, or an empty result set treated as absence
    #[error("{message}")]
    NotFound { message: String },

    /// Missing or invalid request body where one is required
    #[error("{message}")]
    Unprocessable { message: String },

    /// Request body present but malformed
    #[error("{message}")]
    BadRequest { message: String },

    /// Routing matched the path but not the method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Store operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// A missing entity, identified by resource name and id.
    pub fn not_found(resource: &str, id: i32) -> Self {
        Error::NotFound {
            message: format!("{resource} with ID {id} not found"),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::NotFound { message } | Error::Unprocessable { message } | Error::BadRequest { message } => message.clone(),
            Error::MethodNotAllowed => "Method not allowed".to_string(),
            Error::Internal { .. } => "Internal server error".to_string(),
            Error::Database(DbError::NotFound) => "Resource not found".to_string(),
            Error::Database(DbError::Other(_)) | Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details - level matched to severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::NotFound { .. } | Error::BadRequest { .. } | Error::Unprocessable { .. } | Error::MethodNotAllowed => {
                tracing::debug!("Client error: {}", self);
            }
            Error::Database(DbError::NotFound) => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.user_message(),
        });

        (status, axum::response::Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn envelope(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = envelope(Error::not_found("question", 42)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "question with ID 42 not found");
    }

    #[tokio::test]
    async fn test_internal_errors_do_not_leak_details() {
        let (status, body) = envelope(Error::Internal {
            operation: "create question: connection refused".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_status_codes() {
        assert_eq!(
            Error::Unprocessable { message: "no body".into() }.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            Error::BadRequest { message: "bad".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(Error::Database(DbError::NotFound).status_code(), StatusCode::NOT_FOUND);
    }
}
