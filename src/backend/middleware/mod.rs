//! Middleware Module
//!
//! HTTP middleware applied to routes before their handlers run.
//!
//! - **`auth`** - bearer-token authentication for protected routes

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
