use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::SLUG_REGEX;

fn default_true() -> bool {
    true
}

fn default_min_order_quantity() -> i64 {
    1
}

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 2, max = 200, message = "Name must be 2-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub videos: Vec<String>,

    #[serde(default)]
    pub specifications: BTreeMap<String, String>,

    #[validate(range(min = 1, message = "Minimum order quantity must be at least 1"))]
    #[serde(default = "default_min_order_quantity")]
    pub min_order_quantity: i64,

    #[serde(default)]
    pub unit: String,

    /// Derived from the name when omitted
    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase words separated by hyphens"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request DTO for a partial product update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(length(min = 2, max = 200, message = "Name must be 2-200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Category is required"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,

    /// Replaces the whole map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,

    #[validate(range(min = 1, message = "Minimum order quantity must be at least 1"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase words separated by hyphens"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Query params for the public product list
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Only products of this category
    pub category_id: Option<String>,
}

/// Query params for the admin product list
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    /// Only return active products
    #[serde(default)]
    pub active_only: bool,
    /// Only products of this category
    pub category_id: Option<String>,
}
