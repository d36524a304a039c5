//! Database test fixtures and utilities
//!
//! Every fixture is a private in-memory SQLite database on a single
//! connection, migrated with the same migrations the server runs.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use moviefav::backend::auth::users::SqliteUserRepository;
use moviefav::backend::movies::db::{SqliteFavoriteRepository, SqliteMovieRepository};
use moviefav::backend::routes::create_router;
use moviefav::backend::server::config::load_database;
use moviefav::backend::server::AppState;
use moviefav::shared::config::{AppConfig, DatabaseConfig};
use sqlx::SqlitePool;

/// JWT secret shared by every test app
pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-32-bytes!";

/// Configuration for tests: in-memory database, fast bcrypt
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret_key(TEST_JWT_SECRET)
        .bcrypt_cost(4)
        .database_url("sqlite::memory:")
        .max_connections(1)
        .build()
        .expect("test configuration is valid")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new, empty and migrated database
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let pool = load_database(&config)
            .await
            .expect("Failed to create test database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a movie and return its id
    pub async fn insert_movie(&self, id: i64, title: &str, overview: Option<&str>) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO movies (id, original_title, original_language, overview) VALUES (?, ?, 'en', ?) RETURNING id",
        )
        .bind(id)
        .bind(title)
        .bind(overview)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to insert movie")
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

/// A router over a fresh database, plus handles to inspect it
pub struct TestApp {
    pub db: TestDatabase,
    pub state: AppState,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();
        let db = TestDatabase::new().await;
        let pool = db.pool().clone();

        let state = AppState::new(
            &config.server,
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteMovieRepository::new(pool.clone())),
            Arc::new(SqliteFavoriteRepository::new(pool)),
        )
        .expect("Failed to build app state");

        let router = create_router(state.clone(), Duration::from_secs(10));
        Self { db, state, router }
    }
}
