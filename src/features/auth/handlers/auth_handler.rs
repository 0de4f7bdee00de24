use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{
    LoginRequestDto, LoginResponseDto, MeResponseDto, PasswordResetRequestDto,
};
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unknown user, wrong password or too many attempts"),
        (status = 403, description = "Account disabled or not an admin"),
        (status = 503, description = "Authentication service unreachable")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()?;

    let response = service.login(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Request a password reset email
#[utoipa::path(
    post,
    path = "/api/auth/password-reset",
    request_body = PasswordResetRequestDto,
    responses(
        (status = 200, description = "Reset email sent"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unknown user")
    ),
    tag = "auth"
)]
pub async fn request_password_reset(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<PasswordResetRequestDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()?;

    service.request_password_reset(dto).await?;
    Ok(Json(ApiResponse::message("Password reset email sent")))
}

/// Get the signed-in admin
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current admin retrieved successfully", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    ),
    tag = "auth",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    admin: AuthenticatedAdmin,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<ApiResponse<MeResponseDto>>> {
    let me = service.get_current_admin(admin);
    Ok(Json(ApiResponse::success(Some(me), None, None)))
}
