//! Tenant onboarding API for StaffSync.
//!
//! Implements the two boundary operations:
//! - `POST /api/tenant/register` — create a tenant together with its
//!   first admin user, atomically.
//! - `POST /api/login` — verify credentials and return a minimal user
//!   profile (no token or session is issued).
//!
//! Handlers stay thin; the workflows live in [`services`] and the
//! error-to-status mapping in [`error`].

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::OnboardingError;
pub use router::{onboarding_router, OnboardingState};
pub use services::{AuthService, RegistrationService};
