//! Authentication Handlers Module
//!
//! HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types, input validation
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/users/register
//! - **`login`** - POST /api/v1/users/login
//!
//! Both take the JSON body as `Result<Json<_>, JsonRejection>` so an
//! unreadable body is reported in the same error shape as a validation failure.

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

pub use types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

pub use login::login;
pub use register::register;
