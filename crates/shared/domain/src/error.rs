//! Domain-level errors.
//!
//! These errors represent business rule violations and the failure contract of
//! the user directory. They are independent of infrastructure concerns (HTTP,
//! storage engines).

use thiserror::Error;

use crate::user::UserId;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A role string outside the known set
    #[error("Unknown role: {0}")]
    InvalidRole(String),

    /// Password hashing infrastructure failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Failures reported by a user directory.
///
/// Directories classify their own failures into these kinds; callers never
/// inspect the message of `Failure`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Another record already owns this identifier (email)
    #[error("identifier {0} already exists")]
    DuplicateIdentifier(String),

    /// Another record already owns this id
    #[error("user id {0} already exists")]
    DuplicateId(UserId),

    /// No record matches the lookup
    #[error("user not found")]
    NotFound,

    /// Opaque storage failure
    #[error("directory failure: {0}")]
    Failure(String),
}

impl DirectoryError {
    /// Create an opaque failure
    pub fn failure(msg: impl Into<String>) -> Self {
        DirectoryError::Failure(msg.into())
    }
}
