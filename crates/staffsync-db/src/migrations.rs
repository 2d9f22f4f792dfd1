//! Database migration management.
//!
//! The schema lives in versioned SQL files under `migrations/`, embedded
//! at compile time and applied in filename order. The migration ledger
//! table makes re-runs no-ops, so this is safe to call on every process
//! startup.

use crate::error::DbError;
use crate::pool::DbPool;

/// Run all pending database migrations.
///
/// # Errors
///
/// Returns `DbError::MigrationFailed` if any migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool.inner())
        .await
        .map_err(DbError::MigrationFailed)?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}
