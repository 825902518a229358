//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{RequestId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Request not found: {0}")]
    RequestNotFound(RequestId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Cannot send a match request to yourself")]
    SelfRequest,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already exists")]
    UsernameTaken,

    #[error("A pending request to this user already exists")]
    RequestAlreadyPending,

    #[error("Request has already been resolved")]
    RequestAlreadyResolved,

    #[error("User is already matched")]
    AlreadyMatched,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::SelfRequest => "SELF_REQUEST",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::RequestAlreadyPending => "REQUEST_ALREADY_SENT",
            Self::RequestAlreadyResolved => "REQUEST_ALREADY_RESOLVED",
            Self::AlreadyMatched => "ALREADY_MATCHED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::RequestNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::SelfRequest)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken
                | Self::RequestAlreadyPending
                | Self::RequestAlreadyResolved
                | Self::AlreadyMatched
        )
    }
}
