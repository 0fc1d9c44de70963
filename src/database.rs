use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{config::DatabaseConfig, error::Result};

/// Database connection pool type
pub type DbPool = sqlx::SqlitePool;

/// Database connection type - supports both pool connections and transactions
/// Use `conn.as_mut()` for pool connections, `tx.as_mut()` for transactions
pub type DbConn = sqlx::SqliteConnection;

/// Creates the SQLite connection pool and runs embedded migrations.
///
/// Foreign keys are enabled on every connection so that deleting a user
/// cascades to their resumes and jobs. An in-memory database (path
/// `:memory:`) is pinned to a single connection that never expires; each
/// pooled connection would otherwise open its own empty database.
pub async fn init_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if config.path == ":memory:" {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| crate::error::Error::Internal(format!("Migration failed: {}", e)))?;

    tracing::info!(path = %config.path, "Database pool initialized");

    Ok(pool)
}
