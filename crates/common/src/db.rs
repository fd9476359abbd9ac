//! Shared database types for Chatlog
//!
//! Pool bootstrap for the SQLite store and the repository-level error type
//! that domain repositories classify driver errors into.

use std::str::FromStr;
use std::time::Duration;

use sqlx::error::ErrorKind;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::error::Error;

/// Embedded schema migrations (`accounts`, `messages`)
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Open (or create) the SQLite database and bring its schema up to date.
///
/// WAL journal mode and foreign-key enforcement are set on every pooled
/// connection rather than in a migration: SQLite ignores `foreign_keys`
/// inside a transaction and sqlx wraps each migration in one.
pub async fn connect(config: &DatabaseConfig) -> crate::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| Error::Internal(format!("Migration failed: {}", e)))?;

    tracing::info!(url = %config.url, "Database ready");
    Ok(pool)
}

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record already exists")]
    AlreadyExists,

    #[error("Foreign key constraint failed: {0}")]
    ForeignKeyViolation(String),

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Classify a driver error raised by a write statement
    pub fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => return RepositoryError::AlreadyExists,
                ErrorKind::ForeignKeyViolation => {
                    return RepositoryError::ForeignKeyViolation(db_err.message().to_string())
                }
                _ => {}
            }
        }
        RepositoryError::Connection(err)
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::ForeignKeyViolation(msg) => Error::ReferentialIntegrityViolation(msg),
            RepositoryError::Connection(e) => Error::Database(e),
        }
    }
}
