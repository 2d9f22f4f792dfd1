//! User row model.
//!
//! Users belong to exactly one tenant. Email uniqueness is global across
//! all tenants and case-insensitive; the unique index on `LOWER(email)`
//! is the final arbiter against concurrent duplicate registration.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use staffsync_core::{TenantId, UserId};
use uuid::Uuid;

use crate::error::DbError;

/// Role assigned to the first user created with a tenant.
pub const ROLE_ADMIN: &str = "admin";

/// A user account.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub user_id: Uuid,

    /// The tenant this user belongs to.
    pub tenant_id: Uuid,

    /// User's first name.
    pub first_name: String,

    /// User's last name.
    pub last_name: String,

    /// Email address, stored with its original casing. Uniqueness is
    /// enforced case-insensitively.
    pub email: String,

    /// Phone number, format unvalidated.
    pub phone: Option<String>,

    /// User's role. Registration always assigns [`ROLE_ADMIN`].
    pub role: String,

    /// Job title, free-form.
    pub job_title: Option<String>,

    /// Argon2id password hash (PHC string). Never plaintext.
    pub password_hash: String,

    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_id: Uuid,
    pub tenant_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub job_title: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Get the user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.user_id)
    }

    /// Get the tenant ID as a typed `TenantId`.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        TenantId::from_uuid(self.tenant_id)
    }

    /// Insert a user row within a transaction.
    ///
    /// A concurrent registration with the same email surfaces here as a
    /// unique violation on `idx_users_email_ci`.
    pub async fn create_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        new: &NewUser,
    ) -> Result<(), DbError> {
        sqlx::query(
            r"
            INSERT INTO users (user_id, tenant_id, first_name, last_name, email,
                               phone, role, job_title, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(new.user_id)
        .bind(new.tenant_id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.role)
        .bind(&new.job_title)
        .bind(&new.password_hash)
        .bind(new.created_at)
        .execute(&mut **tx)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }

    /// Find a user by email, compared case-insensitively.
    ///
    /// Both the registration uniqueness check and the login lookup go
    /// through this query so write and read paths normalize identically.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT user_id, tenant_id, first_name, last_name, email, phone,
                   role, job_title, password_hash, created_at
            FROM users
            WHERE LOWER(email) = LOWER(?)
            ",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Check if any user exists with this email, compared case-insensitively.
    pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, DbError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE LOWER(email) = LOWER(?)")
                .bind(email)
                .fetch_one(pool)
                .await
                .map_err(DbError::QueryFailed)?;

        Ok(count > 0)
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &SqlitePool, user_id: Uuid) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT user_id, tenant_id, first_name, last_name, email, phone,
                   role, job_title, password_hash, created_at
            FROM users
            WHERE user_id = ?
            ",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Count all user rows.
    pub async fn count(pool: &SqlitePool) -> Result<i64, DbError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.0)
    }
}
