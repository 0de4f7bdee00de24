use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::SLUG_REGEX;

fn default_true() -> bool {
    true
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: String,

    /// Derived from the name when omitted
    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase words separated by hyphens"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[validate(range(min = 0, message = "Order must not be negative"))]
    #[serde(default)]
    pub order: i64,
}

/// Request DTO for a partial category update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase words separated by hyphens"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[validate(range(min = 0, message = "Order must not be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Query params for the admin category list
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListQuery {
    /// Only return active categories
    #[serde(default)]
    pub active_only: bool,
}
