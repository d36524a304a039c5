/**
 * Backend Error Types
 *
 * Every failure a request can end in is one of the variants below. Services
 * build them, handlers return them, and `conversion.rs` turns them into HTTP
 * responses.
 *
 * # Error Categories
 *
 * - `SharedError` - malformed caller input (400)
 * - `BadRequest` - a well-formed request that cannot be honoured, such as bad credentials (400)
 * - `Unauthorized` - missing, malformed, invalid or expired bearer token (401)
 * - `NotFound` - the referenced entity does not exist (404)
 * - `Conflict` - duplicate email at registration or duplicate favorite (409)
 * - `Internal` - store, hashing or signing failures not caused by the caller (500)
 *
 * The public message of `Unauthorized` and `Internal` is fixed; the detail they
 * carry is only ever written to the log.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Public body message for every 401
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized";

/// Public body message for every 500
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Boxed source error kept for logging
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use moviefav::backend::error::BackendError;
///
/// let err = BackendError::not_found("movie 42 not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Caller input failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Request understood but refused
    #[error("Bad request: {message}")]
    BadRequest {
        /// Message returned to the client
        message: String,
    },

    /// Authentication failed; `reason` is logged, never returned
    #[error("Unauthorized: {reason}")]
    Unauthorized {
        reason: String,
    },

    /// Referenced entity is absent
    #[error("Not found: {message}")]
    NotFound {
        message: String,
    },

    /// The write would violate a uniqueness rule
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Infrastructure failure, wrapped with the operation that failed
    #[error("Internal error in {context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: BoxError,
    },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Wrap an infrastructure error with the name of the failing operation
    ///
    /// ```rust
    /// use moviefav::backend::error::BackendError;
    ///
    /// let io = std::io::Error::other("disk on fire");
    /// let err = BackendError::internal("movieRepository.find_by_id", io);
    /// assert!(err.to_string().contains("movieRepository.find_by_id"));
    /// ```
    pub fn internal(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            context,
            source: source.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to return to the client
    pub fn public_message(&self) -> String {
        match self {
            Self::SharedError(err) => err.to_string(),
            Self::BadRequest { message } => message.clone(),
            Self::Unauthorized { .. } => UNAUTHORIZED_MESSAGE.to_string(),
            Self::NotFound { message } => message.clone(),
            Self::Conflict { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
        }
    }
}
