//! Tenant row model.
//!
//! A tenant is a registered company. Exactly one tenant row is created
//! per successful registration, together with its first admin user, and
//! neither row is mutated afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::error::DbError;

/// A registered company.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    /// Unique identifier, generated at registration and immutable.
    pub tenant_id: Uuid,

    /// Human-readable company name (e.g., "Acme Corp").
    pub company_name: String,

    /// Self-reported company size bracket.
    pub company_size: Option<String>,

    /// Self-reported industry.
    pub industry: Option<String>,

    /// Company website URL.
    pub website: Option<String>,

    /// Whether the registrant opted into the newsletter.
    pub subscribe_newsletter: bool,

    /// When the tenant was created.
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new tenant row.
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub tenant_id: Uuid,
    pub company_name: String,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub subscribe_newsletter: bool,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Insert a tenant row within a transaction.
    ///
    /// Registration always pairs this with a user insert in the same
    /// transaction so a tenant can never exist without its admin.
    pub async fn create_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        new: &NewTenant,
    ) -> Result<(), DbError> {
        sqlx::query(
            r"
            INSERT INTO tenants (tenant_id, company_name, company_size, industry,
                                 website, subscribe_newsletter, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(new.tenant_id)
        .bind(&new.company_name)
        .bind(&new.company_size)
        .bind(&new.industry)
        .bind(&new.website)
        .bind(new.subscribe_newsletter)
        .bind(new.created_at)
        .execute(&mut **tx)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(())
    }

    /// Find a tenant by its ID.
    pub async fn find_by_id(pool: &SqlitePool, tenant_id: Uuid) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT tenant_id, company_name, company_size, industry, website,
                   subscribe_newsletter, created_at
            FROM tenants
            WHERE tenant_id = ?
            ",
        )
        .bind(tenant_id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Count all tenant rows.
    pub async fn count(pool: &SqlitePool) -> Result<i64, DbError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tenants")
            .fetch_one(pool)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.0)
    }
}
