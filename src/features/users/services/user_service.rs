use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::users::models::AdminUser;
use crate::modules::document_store::{Collection, Repository};

/// Reads the admin directory to authorize identities
pub struct UserService {
    repository: Repository,
}

impl UserService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Find the directory entry of an identity.
    ///
    /// Lookup order: document id equal to the uid, then a `uid` field, then a
    /// case-insensitive `email` match. `email` must be an address the identity
    /// provider has verified; pass `None` otherwise.
    pub async fn find_by_identity(
        &self,
        uid: &str,
        email: Option<&str>,
    ) -> Result<Option<AdminUser>> {
        if let Some(user) = self
            .repository
            .get_by_id::<AdminUser>(Collection::Users, uid)
            .await?
        {
            return Ok(Some(user));
        }

        let users: Vec<AdminUser> = self.repository.get_all(Collection::Users).await?;

        if let Some(user) = users.iter().find(|u| u.matches_uid(uid)) {
            return Ok(Some(user.clone()));
        }

        Ok(email.and_then(|email| users.into_iter().find(|u| u.matches_email(email))))
    }

    /// Resolve an identity into an admin, rejecting accounts without admin access
    pub async fn authorize(&self, uid: &str, email: Option<&str>) -> Result<AuthenticatedAdmin> {
        let user = self.find_by_identity(uid, email).await?.ok_or_else(|| {
            tracing::warn!("Rejected sign-in for '{}': no admin account", uid);
            AppError::Forbidden("No admin account is registered for this user".to_string())
        })?;

        let role = user.admin_role().ok_or_else(|| {
            tracing::warn!("Rejected sign-in for '{}': role '{}'", uid, user.role);
            AppError::Forbidden("This account does not have admin access".to_string())
        })?;

        Ok(AuthenticatedAdmin {
            uid: uid.to_string(),
            email: Some(user.email)
                .filter(|e| !e.is_empty())
                .or_else(|| email.map(str::to_string)),
            name: Some(user.name).filter(|n| !n.is_empty()),
            role,
        })
    }
}
