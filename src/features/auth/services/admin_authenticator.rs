use std::sync::Arc;

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::auth::JwtValidator;
use crate::features::users::UserService;

/// Turns a bearer token into an admin: token verification, then directory lookup
pub struct AdminAuthenticator {
    validator: Arc<JwtValidator>,
    users: Arc<UserService>,
}

impl AdminAuthenticator {
    pub fn new(validator: Arc<JwtValidator>, users: Arc<UserService>) -> Self {
        Self { validator, users }
    }

    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedAdmin> {
        let identity = self.validator.validate_token(token).await?;
        self.users
            .authorize(&identity.uid, identity.verified_email())
            .await
    }
}
