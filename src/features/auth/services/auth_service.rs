use crate::core::error::Result;
use crate::features::auth::clients::IdentityProvider;
use crate::features::auth::dtos::{
    LoginRequestDto, LoginResponseDto, MeResponseDto, PasswordResetRequestDto,
};
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::users::UserService;
use std::sync::Arc;

/// Service for admin sign-in and password reset
///
/// Sign-out is client-side: the server keeps no session, clients discard tokens.
pub struct AuthService {
    identity: Arc<dyn IdentityProvider>,
    users: Arc<UserService>,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityProvider>, users: Arc<UserService>) -> Self {
        Self { identity, users }
    }

    /// Sign in with email and password.
    ///
    /// Valid credentials without an admin directory entry are rejected and no
    /// tokens are handed out.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let session = self.identity.sign_in(&dto.email, &dto.password).await?;
        // Password sign-in proves ownership of the account's address
        let admin = self
            .users
            .authorize(&session.uid, Some(&session.email))
            .await?;

        tracing::info!("Admin '{}' signed in", admin.uid);

        Ok(LoginResponseDto {
            id_token: session.id_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            admin,
        })
    }

    pub async fn request_password_reset(&self, dto: PasswordResetRequestDto) -> Result<()> {
        self.identity.send_password_reset(&dto.email).await
    }

    pub fn get_current_admin(&self, admin: AuthenticatedAdmin) -> MeResponseDto {
        MeResponseDto { admin }
    }
}
