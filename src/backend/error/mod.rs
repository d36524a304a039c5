//! Backend Error Module
//!
//! This module defines the error taxonomy of the backend server and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation and route fallback
//! ```
//!
//! # Propagation
//!
//! Store and infrastructure failures are wrapped with context as
//! `BackendError::Internal` and surface to the client as a generic 500.
//! Caller-input problems surface their own class (400, 401, 404, 409).

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, BoxError, INTERNAL_MESSAGE, UNAUTHORIZED_MESSAGE};
pub use conversion::not_found_fallback;
