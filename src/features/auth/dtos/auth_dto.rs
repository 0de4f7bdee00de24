use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::AuthenticatedAdmin;

/// Request DTO for admin login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request DTO for a password reset email
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PasswordResetRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Response DTO for a successful admin login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    /// ID token to send as `Authorization: Bearer <token>`
    pub id_token: String,
    pub refresh_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub admin: AuthenticatedAdmin,
}

/// DTO for /api/auth/me response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub admin: AuthenticatedAdmin,
}
