//! Error types for the onboarding API.
//!
//! Workflows raise typed errors; the `IntoResponse` impl maps each
//! variant to a status code and the uniform `{success: false, message}`
//! body. Store-level detail is logged and never reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use staffsync_db::DbError;
use thiserror::Error;

/// Errors raised by the registration and authentication workflows.
#[derive(Debug, Error)]
pub enum OnboardingError {
    /// Malformed or policy-violating input (bad email syntax, short
    /// password, empty required field).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The email address is already registered, in any casing.
    #[error("Email already registered")]
    EmailInUse,

    /// Login failed. Deliberately carries no detail about which field
    /// was wrong.
    #[error("Email or password is incorrect")]
    InvalidCredentials,

    /// A store operation failed.
    #[error("Database error: {0}")]
    Database(#[source] DbError),

    /// Anything uncategorized.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DbError> for OnboardingError {
    fn from(err: DbError) -> Self {
        // A unique violation means a concurrent registration won the
        // race for this email; surface it as the same conflict the
        // pre-insert check produces.
        if err.is_unique_violation() {
            OnboardingError::EmailInUse
        } else {
            OnboardingError::Database(err)
        }
    }
}

/// Uniform failure body for every error response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for OnboardingError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            OnboardingError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            OnboardingError::EmailInUse => {
                (StatusCode::BAD_REQUEST, "Email already registered".to_string())
            }
            OnboardingError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Email or password is incorrect".to_string(),
            ),
            OnboardingError::Database(e) if e.is_transient() => {
                tracing::error!(error = %e, "Transient store failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable".to_string(),
                )
            }
            OnboardingError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
            OnboardingError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}
