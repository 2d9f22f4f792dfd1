//! Request and response DTOs for the onboarding endpoints.

mod requests;
mod responses;

pub use requests::{LoginRequest, RegisterTenantRequest};
pub use responses::{LoginResponse, RegisterTenantResponse, UserProfile};
