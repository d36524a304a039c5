//! Shared Module
//!
//! This module contains types that do not depend on the HTTP server or the
//! database: the movie catalog entity, request validation errors and the
//! application configuration.

/// Movie catalog entity
pub mod movie;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use movie::Movie;
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
