//! Movies Module
//!
//! The movie catalog and user favorites.
//!
//! ```text
//! movies/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Repository traits and SQLite implementations
//! ├── service.rs   - Lookup, search and the favorite workflow
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;

pub mod service;

pub mod handlers;

pub use db::{FavoriteRepository, MovieRepository, SqliteFavoriteRepository, SqliteMovieRepository};
pub use service::MovieService;
