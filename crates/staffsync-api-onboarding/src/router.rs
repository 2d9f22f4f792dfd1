//! Onboarding API router configuration.
//!
//! Routes:
//! - POST /api/tenant/register
//! - POST /api/login

use axum::{routing::post, Router};
use staffsync_db::DbPool;

use crate::handlers::{login_handler, register_tenant_handler};
use crate::services::{AuthService, RegistrationService};

/// Shared state for the onboarding handlers.
#[derive(Clone)]
pub struct OnboardingState {
    pub registration_service: RegistrationService,
    pub auth_service: AuthService,
}

impl OnboardingState {
    /// Build the onboarding services on top of a connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self {
            registration_service: RegistrationService::new(pool.clone()),
            auth_service: AuthService::new(pool),
        }
    }
}

/// Build the onboarding router.
pub fn onboarding_router(state: OnboardingState) -> Router {
    Router::new()
        .route("/api/tenant/register", post(register_tenant_handler))
        .route("/api/login", post(login_handler))
        .with_state(state)
}
