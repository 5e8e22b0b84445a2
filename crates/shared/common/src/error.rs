//! Unified error handling.
//!
//! `AppError` is the closed set of failure kinds every operation returns. The
//! HTTP mapping lives here as well so boundary layers share one translation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DirectoryError, DomainError};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    /// Missing, malformed, forged or expired token
    #[error("Authentication required")]
    Unauthenticated,

    /// Valid token, insufficient role
    #[error("Access denied")]
    Forbidden,

    /// Unknown identifier or wrong secret (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("User not found")]
    UserNotFound,

    #[error("Identifier already exists")]
    IdentifierAlreadyExists,

    // Validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // External collaborators
    #[error("Persistence failure")]
    Persistence(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::IdentifierAlreadyExists => "IDENTIFIER_ALREADY_EXISTS",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Persistence(_) => "PERSISTENCE_FAILURE",
            AppError::Internal(_) => "INTERNAL_FAILURE",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::IdentifierAlreadyExists => StatusCode::CONFLICT,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Persistence(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),

            AppError::Persistence(_) => "A storage error occurred".to_string(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::InvalidInput(msg),
            DomainError::InvalidRole(role) => AppError::InvalidInput(format!("unknown role '{}'", role)),
            DomainError::Hashing(msg) => AppError::Internal(msg),
        }
    }
}

/// Default classification of directory failures.
///
/// Login overrides `NotFound` before it reaches this conversion.
impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateIdentifier(_) => AppError::IdentifierAlreadyExists,
            DirectoryError::NotFound => AppError::UserNotFound,
            DirectoryError::DuplicateId(id) => {
                AppError::Persistence(format!("user id {} already taken", id))
            }
            DirectoryError::Failure(msg) => AppError::Persistence(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
