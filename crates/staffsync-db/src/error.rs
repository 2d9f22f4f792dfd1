//! Error types for the staffsync-db crate.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to establish or acquire a database connection.
    ///
    /// Covers pool acquisition timeouts as well as an unreachable or
    /// locked store.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A database migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(#[source] sqlx::migrate::MigrateError),

    /// A database query failed to execute.
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DbError {
    /// Check if this error was caused by a unique constraint violation.
    ///
    /// This is how a concurrent duplicate registration surfaces: the
    /// unique index on `LOWER(email)` is the final arbiter, and callers
    /// map this case to a conflict rather than a generic fault.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::QueryFailed(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }

    /// Check if this error is transient (worth surfacing as 503).
    ///
    /// Transient errors are connection and timeout failures; the request
    /// may succeed when retried by the client. Query-shape errors are not
    /// transient.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            DbError::ConnectionFailed(_) => true,
            DbError::QueryFailed(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
            _ => false,
        }
    }
}
