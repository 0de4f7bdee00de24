use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::timestamp;

/// Keyed document of the `content` collection holding free-form site copy
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Typed view of the `companyInfo` content value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl CompanyInfo {
    /// Decode a stored value; anything unreadable yields the empty profile
    pub fn from_value(value: &serde_json::Value) -> Self {
        match serde_json::from_value(value.clone()) {
            Ok(info) => info,
            Err(e) => {
                if !value.is_null() {
                    tracing::warn!("Stored company info is unreadable, using defaults: {}", e);
                }
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_default_to_absent() {
        let info = CompanyInfo::from_value(&json!({
            "name": "Mekong Agro",
            "phone": "+84 28 1234 5678",
            "salesEmail": "sales@mekong.example"
        }));
        assert_eq!(info.name, "Mekong Agro");
        assert_eq!(info.sales_email.as_deref(), Some("sales@mekong.example"));
        assert!(info.phone2.is_none());
        assert!(info.website.is_none());
        assert_eq!(info.address, "");

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("phone2").is_none());
    }

    #[test]
    fn test_unreadable_value_falls_back_to_default() {
        assert_eq!(CompanyInfo::from_value(&json!("text")), CompanyInfo::default());
        assert_eq!(CompanyInfo::from_value(&json!(null)), CompanyInfo::default());
        assert_eq!(
            CompanyInfo::from_value(&json!({"name": 7})),
            CompanyInfo::default()
        );
    }
}
