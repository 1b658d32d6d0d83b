//! Error types for permission parsing
//!
//! Evaluators never fail; errors only arise when a host converts stored
//! strings into typed permissions with `?`.

use thiserror::Error;

/// Permission parsing error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The string is not one of the known permission identifiers
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),
}

/// Result type for permission parsing.
pub type PermissionResult<T> = Result<T, PermissionError>;

impl PermissionError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PermissionError::UnknownPermission(_) => "UNKNOWN_PERMISSION",
        }
    }
}
