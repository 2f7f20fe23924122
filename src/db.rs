//! Database connection and schema management for the VetNest API.
//!
//! This module initializes the SeaORM connection pool and applies the
//! versioned migrations from the `migration` crate.

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::AppConfig;

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {source}")]
    ConnectionFailed {
        #[from]
        source: sea_orm::DbErr,
    },
    #[error("Invalid database configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Initializes a database connection pool with the given configuration.
///
/// A single connection attempt is made; failures are returned to the caller.
/// In-memory SQLite databases are limited to one pooled connection, since
/// every SQLite connection to `:memory:` opens a separate database.
///
/// # Examples
///
/// ```no_run
/// use vetnest_api::{config::AppConfig, db::init_pool};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = AppConfig::default();
///     let db = init_pool(&config).await?;
///     // Use the database connection...
///     Ok(())
/// }
/// ```
pub async fn init_pool(cfg: &AppConfig) -> Result<DatabaseConnection> {
    if cfg.database_url.trim().is_empty() {
        return Err(DatabaseError::InvalidConfiguration {
            message: "Database URL cannot be empty".to_string(),
        }
        .into());
    }

    let opt = connect_options(cfg);
    let max_connections = opt.get_max_connections().unwrap_or_default();

    let conn = Database::connect(opt)
        .await
        .map_err(|source| DatabaseError::ConnectionFailed { source })?;

    log::info!(
        "Connected to database (backend: {:?}, max connections: {})",
        conn.get_database_backend(),
        max_connections
    );

    Ok(conn)
}

/// Pool options for the configured URL. An in-memory SQLite database lives only
/// as long as its single connection, so that connection is pinned and never recycled.
fn connect_options(cfg: &AppConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(&cfg.database_url);
    opt.acquire_timeout(Duration::from_millis(cfg.db_acquire_timeout_ms))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    if is_in_memory_sqlite(&cfg.database_url) {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cfg.db_max_connections)
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)); // 30 minutes
    }

    opt
}

/// Applies every pending migration, recording each in the migration history table.
pub async fn apply_migrations(db: &DatabaseConnection) -> Result<()> {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .context("Failed to read migration status")?
        .len();

    Migrator::up(db, None)
        .await
        .context("Failed to apply database migrations")?;

    tracing::info!(applied = pending, "Database schema is up to date");
    Ok(())
}

/// Health check for the database connection.
///
/// Verifies that the connection is still active by executing a trivial query.
pub async fn health_check(db: &DatabaseConnection) -> Result<()> {
    use sea_orm::Statement;

    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());

    db.query_one(stmt)
        .await
        .context("Database health check failed")?;

    Ok(())
}

fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_database_url() {
        let config = AppConfig {
            database_url: "".to_string(),
            ..Default::default()
        };

        let result = init_pool(&config).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err().downcast::<DatabaseError>(),
            Ok(DatabaseError::InvalidConfiguration { .. })
        ));
    }

    #[tokio::test]
    async fn test_in_memory_pool_migrates_and_is_healthy() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            ..Default::default()
        };

        let db = init_pool(&config).await.expect("in-memory pool");
        apply_migrations(&db).await.expect("migrations apply");
        apply_migrations(&db).await.expect("migrations are idempotent");
        health_check(&db).await.expect("healthy");

        let pending = Migrator::get_pending_migrations(&db).await.unwrap();
        assert!(pending.is_empty());
    }

    #[test]
    fn test_in_memory_connection_is_pinned() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            ..Default::default()
        };

        let opt = connect_options(&config);

        assert_eq!(opt.get_max_connections(), Some(1));
        assert_eq!(opt.get_min_connections(), Some(1));
        assert!(opt.get_idle_timeout().is_none());
        assert!(opt.get_max_lifetime().is_none());
    }

    #[test]
    fn test_file_database_connections_are_recycled() {
        let config = AppConfig {
            database_url: "sqlite://vetnest.db?mode=rwc".to_string(),
            db_max_connections: 7,
            ..Default::default()
        };

        let opt = connect_options(&config);

        assert_eq!(opt.get_max_connections(), Some(7));
        assert_eq!(opt.get_idle_timeout(), Some(Duration::from_secs(600)));
        assert_eq!(opt.get_max_lifetime(), Some(Duration::from_secs(1800)));
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(is_in_memory_sqlite("sqlite://file.db?mode=memory"));
        assert!(!is_in_memory_sqlite("sqlite://vetnest.db?mode=rwc"));
        assert!(!is_in_memory_sqlite("postgres://localhost/vetnest"));
    }
}
