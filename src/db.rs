//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Opening the SQLite database file (created if missing) behind a connection pool
//! - Running the embedded schema migrations

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

/// Type alias for the SQLite connection pool.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// The pool is the per-request connection factory: a handler borrows a connection
/// for the duration of a query or transaction and it returns to the pool when
/// dropped, on success and error paths alike.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://wina_bwangu.db`
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is pinned
/// to a single connection that is never recycled.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Applied migrations are tracked in the `_sqlx_migrations` table, so each runs once.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_both_tables() {
        let pool = create_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('transactions', 'users') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["transactions", "users"]);
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }
}
