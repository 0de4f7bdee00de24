use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::{lenient, timestamp};

/// Document of the `products` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Weak reference to a category; may point at a deleted one
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_map")]
    pub specifications: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub min_order_quantity: i64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}
