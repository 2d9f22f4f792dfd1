//! Tenant registration workflow.
//!
//! Validates input, enforces global email uniqueness, hashes the
//! password, and atomically inserts one tenant row and one user row.

use chrono::Utc;
use staffsync_auth::PasswordHasher;
use staffsync_core::{TenantId, UserId};
use staffsync_db::{DbError, DbPool, NewTenant, NewUser, Tenant, User, ROLE_ADMIN};

use crate::error::OnboardingError;
use crate::models::RegisterTenantRequest;
use crate::services::validation::{is_valid_email, MIN_PASSWORD_LENGTH};

/// Service that provisions a tenant together with its first admin user.
#[derive(Clone)]
pub struct RegistrationService {
    pool: DbPool,
    password_hasher: PasswordHasher,
}

impl RegistrationService {
    /// Create a new registration service with the default hashing
    /// work factor.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            password_hasher: PasswordHasher::default(),
        }
    }

    /// Register a tenant and its admin user.
    ///
    /// The two inserts share one transaction and one creation timestamp:
    /// a failure on the user insert leaves no tenant row behind. The
    /// uniqueness pre-check and the insert are not atomic against a
    /// concurrent registration; the unique index on the email column is
    /// the final arbiter, and a violation surfaces as the same conflict
    /// error.
    ///
    /// # Errors
    ///
    /// - `OnboardingError::Validation` for a short password or malformed
    ///   email
    /// - `OnboardingError::EmailInUse` when the email is already
    ///   registered, in any casing
    pub async fn register_tenant(
        &self,
        request: &RegisterTenantRequest,
    ) -> Result<TenantId, OnboardingError> {
        if request.admin_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(OnboardingError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        // Stored with original casing; compared case-insensitively.
        let email = request.admin_email.trim();
        if !is_valid_email(email) {
            return Err(OnboardingError::Validation(
                "Invalid email format".to_string(),
            ));
        }

        if User::email_exists(self.pool.inner(), email).await? {
            return Err(OnboardingError::EmailInUse);
        }

        let tenant_id = TenantId::new();
        let user_id = UserId::new();

        let password_hash = self
            .password_hasher
            .hash(&request.admin_password)
            .map_err(|e| OnboardingError::Internal(format!("Password hashing failed: {e}")))?;

        let created_at = Utc::now();

        let tenant = NewTenant {
            tenant_id: *tenant_id.as_uuid(),
            company_name: request.company_name.clone(),
            company_size: request.company_size.clone(),
            industry: request.industry.clone(),
            website: request.website.clone(),
            subscribe_newsletter: request.subscribe_newsletter,
            created_at,
        };

        let user = NewUser {
            user_id: *user_id.as_uuid(),
            tenant_id: *tenant_id.as_uuid(),
            first_name: request.admin_first_name.clone(),
            last_name: request.admin_last_name.clone(),
            email: email.to_string(),
            phone: Some(request.admin_phone.clone()),
            role: ROLE_ADMIN.to_string(),
            job_title: request.job_title.clone(),
            password_hash,
            created_at,
        };

        let mut tx = self.pool.begin().await?;
        Tenant::create_in_tx(&mut tx, &tenant).await?;
        User::create_in_tx(&mut tx, &user).await?;
        tx.commit().await.map_err(DbError::QueryFailed)?;

        tracing::info!(
            tenant_id = %tenant_id,
            user_id = %user_id,
            "Tenant registered with admin user"
        );

        Ok(tenant_id)
    }
}
