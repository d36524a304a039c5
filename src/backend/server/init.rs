/**
 * Server Initialization
 *
 * Builds the application from configuration:
 * 1. Open the SQLite pool and run migrations
 * 2. Wrap the pool in repositories
 * 3. Build the token maker and services
 * 4. Create the router
 *
 * Every step can fail, and every failure stops startup with a `ServerError`.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::SqliteUserRepository;
use crate::backend::movies::db::{SqliteFavoriteRepository, SqliteMovieRepository};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Startup failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),

    #[error("token maker: {0}")]
    Token(#[from] TokenError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router, ServerError> {
    tracing::info!("Initializing moviefav backend server");

    let pool = load_database(&config.database).await?;

    let app_state = AppState::new(
        &config.server,
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteMovieRepository::new(pool.clone())),
        Arc::new(SqliteFavoriteRepository::new(pool)),
    )?;

    let app = create_router(app_state, config.server.request_timeout());
    tracing::info!("Router configured");

    Ok(app)
}
