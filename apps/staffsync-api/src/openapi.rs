//! OpenAPI document for the onboarding endpoints.
//!
//! The raw JSON is served at /api-docs/openapi.json; rendering it is
//! left to external tooling.

use axum::Json;
use staffsync_api_onboarding::error::ErrorBody;
use staffsync_api_onboarding::models::{
    LoginRequest, LoginResponse, RegisterTenantRequest, RegisterTenantResponse, UserProfile,
};
use utoipa::OpenApi;

/// OpenAPI description of the StaffSync onboarding API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "StaffSync Onboarding API",
        description = "Tenant registration and login",
    ),
    paths(
        staffsync_api_onboarding::handlers::register::register_tenant_handler,
        staffsync_api_onboarding::handlers::login::login_handler,
    ),
    components(schemas(
        RegisterTenantRequest,
        RegisterTenantResponse,
        LoginRequest,
        LoginResponse,
        UserProfile,
        ErrorBody,
    )),
    tags(
        (name = "Onboarding", description = "Tenant registration and login")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json - serve the OpenAPI document.
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
