//! Shared Error Types
//!
//! Errors raised while checking caller input before any service work happens.
//!
//! # Usage
//!
//! ```rust
//! use moviefav::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must be a valid email address");
//! assert_eq!(error.field(), "email");
//! ```
use thiserror::Error;

/// Errors caused by malformed caller input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A single field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The request body or path could not be parsed at all
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed request error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Name of the offending field, or `"request"` when the whole request is unreadable
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
            Self::MalformedRequest { .. } => "request",
        }
    }
}
