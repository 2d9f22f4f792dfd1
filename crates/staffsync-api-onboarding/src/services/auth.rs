//! Authentication workflow.
//!
//! Looks up a user by email and verifies the supplied password against
//! the stored hash. Every failure mode produces the same
//! `InvalidCredentials` error so callers cannot tell whether the email
//! exists.

use staffsync_auth::PasswordHasher;
use staffsync_db::{DbPool, User};

use crate::error::OnboardingError;

/// Service for credential verification.
#[derive(Clone)]
pub struct AuthService {
    pool: DbPool,
    password_hasher: PasswordHasher,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            password_hasher: PasswordHasher::default(),
        }
    }

    /// Authenticate a user with email and password.
    ///
    /// The email is trimmed and compared case-insensitively, matching
    /// how registration checks uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `OnboardingError::InvalidCredentials` for an unknown
    /// email or a wrong password — indistinguishably.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, OnboardingError> {
        let email = email.trim();

        let user = User::find_by_email(self.pool.inner(), email).await?;

        let user = user.ok_or_else(|| {
            tracing::debug!("Login attempt for unknown email");
            OnboardingError::InvalidCredentials
        })?;

        let valid = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(user_id = %user.user_id, error = %e, "Password verification error");
                OnboardingError::Internal("Password verification failed".to_string())
            })?;

        if !valid {
            tracing::debug!(user_id = %user.user_id, "Invalid password attempt");
            return Err(OnboardingError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");
        Ok(user)
    }
}
