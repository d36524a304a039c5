//! Integration tests
//!
//! - `api` - HTTP endpoints driven through the router
//! - `database` - repository behavior against SQLite

mod api;
mod database;
