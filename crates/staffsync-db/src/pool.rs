//! Connection pool management.
//!
//! The store location is a SQLite URL (`sqlite:staffsync.db` or
//! `sqlite::memory:`). Pool acquisition and SQLite's own lock wait are
//! both bounded so no store call blocks indefinitely; a connection
//! checked out of the pool is returned on every exit path, including
//! error paths, by the pool guard itself.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbError;

/// How long to wait for a pooled connection before failing the request.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// How long SQLite waits on a locked database before returning busy.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared handle to the SQLite connection pool.
#[derive(Clone)]
pub struct DbPool {
    pool: SqlitePool,
}

impl DbPool {
    /// Connect to the database at the given URL.
    ///
    /// Creates the database file if it does not exist and enables
    /// foreign key enforcement on every connection.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConnectionFailed` if the URL is invalid or the
    /// store cannot be opened.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(DbError::ConnectionFailed)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(DbError::ConnectionFailed)?;

        info!(url = %url, "Database connection established");

        Ok(Self { pool })
    }

    /// Connect to a fresh in-memory database.
    ///
    /// A single connection is held for the lifetime of the pool — each
    /// in-memory SQLite connection is its own database, so the pool must
    /// never open a second one or close the first.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConnectionFailed` if the connection cannot be
    /// opened.
    pub async fn connect_in_memory() -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(DbError::ConnectionFailed)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(DbError::ConnectionFailed)?;

        Ok(Self { pool })
    }

    /// Returns a reference to the underlying sqlx pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a new transaction.
    ///
    /// Dropping the transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConnectionFailed` if no connection can be
    /// acquired within the timeout.
    pub async fn begin(&self) -> Result<sqlx::Transaction<'_, sqlx::Sqlite>, DbError> {
        self.pool.begin().await.map_err(DbError::ConnectionFailed)
    }
}
