/**
 * Database Setup
 *
 * Builds the SQLite connection pool from `DatabaseConfig` and runs the
 * embedded migrations. Unlike the rest of the server this is not optional:
 * a database that cannot be opened or migrated stops startup.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::server::init::ServerError;
use crate::shared::config::DatabaseConfig;

/// Open the pool and bring the schema up to date
///
/// An in-memory database lives only as long as its connection, so for
/// `sqlite::memory:` URLs pooled connections are never recycled.
pub async fn load_database(config: &DatabaseConfig) -> Result<SqlitePool, ServerError> {
    tracing::info!(max_connections = config.max_connections, "Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(ServerError::Database)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
    if config.url.contains(":memory:") {
        pool_options = pool_options
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(ServerError::Database)?;
    tracing::info!("Database connection pool created successfully");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(ServerError::Migration)?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
