//! Authentication Module
//!
//! User registration, login and access-token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store
//! ├── password.rs     - bcrypt password hashing
//! ├── sessions.rs     - JWT token maker
//! ├── service.rs      - Registration and login workflows
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → email checked for uniqueness → password hashed → user stored
//! 2. **Login**: email and password → credentials verified → access token issued with the username as subject
//! 3. **Protected routes**: bearer token verified by `middleware::auth` → subject resolved to a user
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt and never serialized
//! - Tokens are HS256 JWTs with a fixed lifetime and no revocation
//! - Failed logins return one generic message

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Registration and login
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use password::{PasswordError, PasswordHasher};
pub use service::{UserService, UserWithAccessToken};
pub use sessions::{TokenError, TokenMaker, TokenPayload};
pub use users::{SqliteUserRepository, User, UserRepository};
