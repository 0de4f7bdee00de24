use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ROLE_ADMIN, ROLE_SUPER_ADMIN};

/// Back-office roles; any other role stored in the directory grants nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

impl AdminRole {
    pub fn parse(role: &str) -> Option<Self> {
        match role.trim() {
            ROLE_ADMIN => Some(AdminRole::Admin),
            ROLE_SUPER_ADMIN => Some(AdminRole::SuperAdmin),
            _ => None,
        }
    }
}

/// Admin attached to a request after token verification and directory lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedAdmin {
    /// Identity-provider user id
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: AdminRole,
}

/// Identity proven by a verified ID token, not yet authorized
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub uid: String,
    pub email: Option<String>,
    pub email_verified: bool,
}

impl VerifiedIdentity {
    /// Email usable for directory lookup; unverified addresses are withheld
    pub fn verified_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|_| self.email_verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!(AdminRole::parse("admin"), Some(AdminRole::Admin));
        assert_eq!(AdminRole::parse("super_admin"), Some(AdminRole::SuperAdmin));
        assert_eq!(AdminRole::parse(" admin "), Some(AdminRole::Admin));
        assert_eq!(AdminRole::parse("Admin"), None);
        assert_eq!(AdminRole::parse("editor"), None);
        assert_eq!(AdminRole::parse(""), None);
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let admin = AuthenticatedAdmin {
            uid: "u".to_string(),
            email: None,
            name: None,
            role: AdminRole::SuperAdmin,
        };
        let value = serde_json::to_value(&admin).unwrap();
        assert_eq!(value["role"], "super_admin");
        assert!(value.get("email").is_none());
    }
}
