//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly and middleware layers
//! └── api_routes.rs   - The /api/v1 route table
//! ```

/// Main router creation
pub mod router;

/// API route table
pub mod api_routes;

pub use router::{create_router, API_PREFIX};
