//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Authentication test helpers
//! - Custom assertion macros

// Each test binary uses a different subset of the helpers
#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
