//! Error types for tenant validation
//!
//! The boolean validators never fail. These errors are produced by the
//! `Result`-returning entry points used during organization create/update
//! flows and by the `FromStr` implementations of the tenant enums.

use thiserror::Error;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Slug does not match the slug pattern
    #[error("Invalid organization slug: {0}")]
    InvalidSlug(String),

    /// Slug is on the reserved word list
    #[error("Organization slug is reserved: {0}")]
    ReservedSlug(String),

    /// Name is empty or too long once trimmed
    #[error("Organization name must be between 1 and 100 characters")]
    InvalidName,

    /// Role name does not match the role name pattern
    #[error("Invalid role name: {0}")]
    InvalidRoleName(String),

    /// Email is not syntactically valid
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Role string is not a system role
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Tier string is not a known tier
    #[error("Unknown organization tier: {0}")]
    UnknownTier(String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidSlug(_) => "INVALID_SLUG",
            ValidationError::ReservedSlug(_) => "RESERVED_SLUG",
            ValidationError::InvalidName => "INVALID_NAME",
            ValidationError::InvalidRoleName(_) => "INVALID_ROLE_NAME",
            ValidationError::InvalidEmail(_) => "INVALID_EMAIL",
            ValidationError::UnknownRole(_) => "UNKNOWN_ROLE",
            ValidationError::UnknownTier(_) => "UNKNOWN_TIER",
        }
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ValidationError::ReservedSlug(_) => 409,
            _ => 400,
        }
    }
}
