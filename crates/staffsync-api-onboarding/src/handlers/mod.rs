//! HTTP handlers for the onboarding endpoints.

pub mod login;
pub mod register;

pub use login::login_handler;
pub use register::register_tenant_handler;
