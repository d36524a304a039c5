//! MovieFav - Main Library
//!
//! MovieFav is a small REST backend for browsing a movie catalog and keeping a
//! per-user list of favorite movies. Users register, log in to receive a signed
//! bearer token, and present that token to reach the favorites endpoints.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependencies
//!   - Movie entity, validation errors, application configuration
//!
//! - **`backend`** - The Axum server
//!   - Password hashing and JWT issuance/verification
//!   - Authentication middleware resolving the current user
//!   - User and movie services over repository traits
//!   - SQLite-backed and in-memory repositories
//!
//! # Usage
//!
//! ```rust,no_run
//! use moviefav::backend::server::create_app;
//! use moviefav::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `thiserror` enums per layer, converted into `backend::error::BackendError`
//!   at the HTTP boundary

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
