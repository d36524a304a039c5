//! Storage Module
//!
//! Errors shared by every repository implementation, plus the in-memory
//! repositories used by tests and local experiments.
//!
//! The repository traits themselves live next to their domain:
//! `auth::users::UserRepository`, `movies::db::MovieRepository` and
//! `movies::db::FavoriteRepository`.

/// In-memory repository implementation
pub mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

/// Errors returned by repository implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would break a uniqueness constraint
    #[error("unique constraint violated: {0}")]
    Duplicate(String),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an error returned by an INSERT
    ///
    /// Unique-constraint violations become `Duplicate` so services can report
    /// them as conflicts instead of internal errors.
    pub fn from_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate(db_err.message().to_string())
            }
            _ => Self::Database(err),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}
