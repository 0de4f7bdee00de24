use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::{lenient, timestamp};

/// Document of the `categories` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
    /// Display position, ascending
    #[serde(default, deserialize_with = "lenient::integer")]
    pub order: i64,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}
