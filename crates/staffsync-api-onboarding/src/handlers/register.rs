//! Tenant registration endpoint handler.
//!
//! POST /api/tenant/register - Create a tenant and its first admin user.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::OnboardingError;
use crate::models::{RegisterTenantRequest, RegisterTenantResponse};
use crate::router::OnboardingState;

/// Handle tenant registration.
///
/// Creates the company record and its admin user atomically and returns
/// the new tenant identifier.
#[utoipa::path(
    post,
    path = "/api/tenant/register",
    request_body = RegisterTenantRequest,
    responses(
        (status = 201, description = "Tenant registered", body = RegisterTenantResponse),
        (status = 400, description = "Validation error or email already registered", body = crate::error::ErrorBody),
    ),
    tag = "Onboarding"
)]
pub async fn register_tenant_handler(
    State(state): State<OnboardingState>,
    Json(request): Json<RegisterTenantRequest>,
) -> Result<(StatusCode, Json<RegisterTenantResponse>), OnboardingError> {
    request.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect();
        OnboardingError::Validation(errors.join(", "))
    })?;

    let tenant_id = state.registration_service.register_tenant(&request).await?;

    let response = RegisterTenantResponse {
        success: true,
        message: "Tenant registered successfully".to_string(),
        tenant_id,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
