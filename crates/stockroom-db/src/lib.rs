//! # Stockroom DB
//!
//! SQLite connection pool and embedded migrations for the Stockroom API.
//!
//! # Example
//!
//! ```ignore
//! use stockroom_config::DatabaseConfig;
//! use stockroom_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use stockroom_config::DatabaseConfig;

pub use sqlx::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a pool against `config.url`, creating the database file if it does
/// not exist yet.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .connect_with(options)
        .await?;

    tracing::debug!(url = %config.url, "Database pool ready");

    Ok(pool)
}

/// Opens a single-connection in-memory database with migrations applied.
///
/// The connection is never recycled, since dropping it would discard the
/// database.
pub async fn init_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_pool_has_users_table() {
        let pool = init_memory_pool().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_username_is_unique() {
        let pool = init_memory_pool().await.unwrap();
        let insert = "INSERT INTO users (username, password, role) VALUES ('bob', 'h', 'user')";

        sqlx::query(insert).execute(&pool).await.unwrap();
        let err = sqlx::query(insert).execute(&pool).await.unwrap_err();

        match err {
            sqlx::Error::Database(db) => assert!(db.is_unique_violation()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_role_is_constrained() {
        let pool = init_memory_pool().await.unwrap();

        let result = sqlx::query(
            "INSERT INTO users (username, password, role) VALUES ('eve', 'h', 'root')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = init_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
    }
}
