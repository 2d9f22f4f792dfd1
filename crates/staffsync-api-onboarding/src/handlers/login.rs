//! Login endpoint handler.
//!
//! POST /api/login - Verify credentials and return the user's profile.
//! No token or session is issued; the caller holds the profile at its
//! own discretion.

use axum::{extract::State, Json};
use validator::Validate;

use crate::error::OnboardingError;
use crate::models::{LoginRequest, LoginResponse};
use crate::router::OnboardingState;

/// Handle user login.
///
/// A malformed email is not reported as such — it simply cannot match
/// any account, so it yields the same generic 401 as a wrong password.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Email or password is incorrect", body = crate::error::ErrorBody),
    ),
    tag = "Onboarding"
)]
pub async fn login_handler(
    State(state): State<OnboardingState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, OnboardingError> {
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

    let user = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        user: user.into(),
    }))
}
