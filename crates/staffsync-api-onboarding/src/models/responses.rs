//! Response DTOs for the onboarding endpoints.

use serde::Serialize;
use staffsync_core::{TenantId, UserId};
use staffsync_db::User;
use utoipa::ToSchema;

/// Successful registration response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterTenantResponse {
    pub success: bool,
    pub message: String,
    /// Identifier of the newly created tenant.
    #[schema(value_type = uuid::Uuid)]
    pub tenant_id: TenantId,
}

/// Minimal user profile returned on login.
///
/// Deliberately excludes the password hash and everything else the
/// caller has no business seeing.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    #[schema(value_type = uuid::Uuid)]
    pub user_id: UserId,
    #[schema(value_type = uuid::Uuid)]
    pub tenant_id: TenantId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id(),
            tenant_id: user.tenant_id(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserProfile,
}
