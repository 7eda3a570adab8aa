//! SQLite pool lifecycle: open, migrate, close.

use crate::config::FileDatabaseConfig;
use polls_application::RepositoryError;
use sqlx::error::ErrorKind;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while opening or migrating the database
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Invalid database URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Could not open database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migrate(#[from] MigrateError),
}

/// Open a pool for the configured database, creating the file if needed.
///
/// In-memory databases exist per connection, so they are pinned to a
/// single connection that is never recycled.
pub async fn connect(config: &FileDatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let in_memory = is_in_memory(&config.url);
    let mut options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|source| DatabaseError::InvalidUrl {
            url: config.url.clone(),
            source,
        })?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = if in_memory {
        debug!("Using a single pinned connection for in-memory database");
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connect)?;

    info!("Opened database {}", config.url);
    Ok(pool)
}

/// Apply pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    debug!("Database schema is up to date");
    Ok(())
}

/// Open and migrate in one step.
pub async fn open(config: &FileDatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let pool = connect(config).await?;
    migrate(&pool).await?;
    Ok(pool)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Translate a sqlx failure into the port's error taxonomy.
pub(crate) fn repository_error(error: sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::ForeignKeyViolation
            | ErrorKind::CheckViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::UniqueViolation => {
                RepositoryError::ConstraintViolation(db.message().to_string())
            }
            _ => RepositoryError::QueryFailed(db.message().to_string()),
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionError(error.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::CorruptRecord(error.to_string())
        }
        other => RepositoryError::QueryFailed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:polls?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://polls.db"));
    }

    #[tokio::test]
    async fn test_open_in_memory_runs_migrations() {
        let config = FileDatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 5,
        };
        let pool = open(&config).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('question', 'choice') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["choice".to_string(), "question".to_string()]);

        pool.close().await;
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let config = FileDatabaseConfig {
            url: "sqlite://polls.db?mode=sideways".to_string(),
            max_connections: 1,
        };
        assert!(matches!(
            connect(&config).await,
            Err(DatabaseError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_pool_errors_are_connection_errors() {
        assert!(matches!(
            repository_error(sqlx::Error::PoolTimedOut),
            RepositoryError::ConnectionError(_)
        ));
        assert!(matches!(
            repository_error(sqlx::Error::RowNotFound),
            RepositoryError::QueryFailed(_)
        ));
    }
}
