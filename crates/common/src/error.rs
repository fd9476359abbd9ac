//! Common error types and handling for Chatlog

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Chatlog application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Storage failure: any I/O or driver error from the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Conversation not found: no messages exchanged between {user_a} and {user_b}")]
    ConversationNotFound { user_a: String, user_b: String },

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrityViolation(String),

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) | Error::InvalidCursor(_) => StatusCode::BAD_REQUEST,
            Error::UnknownAccount(_) | Error::ConversationNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Conflict(_) | Error::ReferentialIntegrityViolation(_) => StatusCode::CONFLICT,
            Error::Database(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Database(_) => "STORAGE_FAILURE",
            Error::Authentication(_) => "AUTHENTICATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::UnknownAccount(_) => "UNKNOWN_ACCOUNT",
            Error::ConversationNotFound { .. } => "CONVERSATION_NOT_FOUND",
            Error::ReferentialIntegrityViolation(_) => "REFERENTIAL_INTEGRITY_VIOLATION",
            Error::InvalidCursor(_) => "INVALID_CURSOR",
            Error::Conflict(_) => "CONFLICT",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Log internal errors with full context
        if matches!(self.status_code(), StatusCode::INTERNAL_SERVER_ERROR) {
            tracing::error!(error = %self, "Internal server error");
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
