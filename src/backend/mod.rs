//! Backend Module
//!
//! This module contains all server-side code for MovieFav: an Axum HTTP server
//! exposing registration, login, movie search and per-user favorites.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, user storage and the user service
//! - **`middleware`** - Bearer-token authentication for protected routes
//! - **`movies`** - Movie catalog and favorites (storage, service, handlers)
//! - **`store`** - Storage errors and the in-memory repository implementation
//! - **`error`** - Backend error taxonomy and HTTP conversion
//!
//! # Request Flow
//!
//! ```text
//! request -> auth middleware (protected routes only) -> handler
//!         -> service -> repository trait -> SQLite / in-memory store
//! ```
//!
//! # Thread Safety
//!
//! Handlers share an `AppState` holding `Arc`'d repositories and an immutable
//! `TokenMaker`. There is no other shared mutable state; each request runs in
//! its own task and carries its authenticated user in its own extensions.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Movie catalog and favorites
pub mod movies;

/// Storage errors and in-memory repositories
pub mod store;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
