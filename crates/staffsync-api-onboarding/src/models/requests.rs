//! Request DTOs for the onboarding endpoints.
//!
//! Length bounds are checked here with the `validator` derive. Email
//! syntax is checked in the registration workflow after the address is
//! trimmed, so a copy-pasted address with stray whitespace is not
//! rejected for its padding.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Tenant registration payload.
///
/// Creates the company and its first admin user in one operation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterTenantRequest {
    /// Company name.
    #[validate(length(min = 1, max = 255, message = "Company name is required"))]
    pub company_name: String,

    /// Admin user's first name.
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub admin_first_name: String,

    /// Admin user's last name.
    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub admin_last_name: String,

    /// Admin user's email address. Must be unique across all tenants.
    #[validate(length(max = 255, message = "Email too long"))]
    pub admin_email: String,

    /// Admin user's phone number. Format is not validated.
    pub admin_phone: String,

    /// Admin user's password.
    /// The upper bound prevents `DoS` via extremely long passwords that
    /// would consume excessive CPU during hashing.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub admin_password: String,

    /// Company size bracket.
    pub company_size: Option<String>,

    /// Industry.
    pub industry: Option<String>,

    /// Company website URL.
    pub website: Option<String>,

    /// Admin user's job title.
    pub job_title: Option<String>,

    /// Newsletter opt-in. Defaults to false when omitted.
    #[serde(default)]
    pub subscribe_newsletter: bool,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address.
    pub email: String,

    /// User's password.
    #[validate(length(max = 1024, message = "Password too long"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterTenantRequest {
        RegisterTenantRequest {
            company_name: "Acme".to_string(),
            admin_first_name: "Ada".to_string(),
            admin_last_name: "Lovelace".to_string(),
            admin_email: "a@acme.com".to_string(),
            admin_phone: "555-0100".to_string(),
            admin_password: "longenough1".to_string(),
            company_size: None,
            industry: None,
            website: None,
            job_title: None,
            subscribe_newsletter: false,
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_company_name_fails() {
        let mut request = valid_request();
        request.company_name = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn seven_char_password_fails() {
        let mut request = valid_request();
        request.admin_password = "1234567".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn eight_char_password_passes() {
        let mut request = valid_request();
        request.admin_password = "12345678".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn newsletter_defaults_to_false() {
        let request: RegisterTenantRequest = serde_json::from_str(
            r#"{
                "company_name": "Acme",
                "admin_first_name": "Ada",
                "admin_last_name": "Lovelace",
                "admin_email": "a@acme.com",
                "admin_phone": "555-0100",
                "admin_password": "longenough1"
            }"#,
        )
        .unwrap();
        assert!(!request.subscribe_newsletter);
        assert!(request.company_size.is_none());
    }
}
