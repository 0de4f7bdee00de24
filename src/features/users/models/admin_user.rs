use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::auth::model::AdminRole;
use crate::shared::timestamp;

/// Document of the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    /// Identity-provider uid when the document id is not the uid itself
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AdminUser {
    /// Back-office role, or `None` when the account has no admin access
    pub fn admin_role(&self) -> Option<AdminRole> {
        AdminRole::parse(&self.role)
    }

    pub fn matches_uid(&self, uid: &str) -> bool {
        self.id == uid || self.uid.as_deref() == Some(uid)
    }

    pub fn matches_email(&self, email: &str) -> bool {
        !self.email.is_empty() && self.email.eq_ignore_ascii_case(email)
    }
}
