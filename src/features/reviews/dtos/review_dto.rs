use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reviews::models::ReviewStatus;

/// Request DTO for a review; public submissions always start pending
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub country: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,

    #[validate(length(min = 10, max = 2000, message = "Review must be 10-2000 characters"))]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Admin only; defaults to `approved` for admin-created reviews
    #[serde(default, skip_serializing)]
    pub status: Option<ReviewStatus>,
}

/// Request DTO for a partial review update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewDto {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,

    #[validate(length(min = 10, max = 2000, message = "Review must be 10-2000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing)]
    pub status: Option<ReviewStatus>,
}

/// Request DTO for a moderation decision
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewStatusDto {
    pub status: ReviewStatus,
}

/// Query params for the admin review list
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ReviewListQuery {
    /// Only reviews with this status
    pub status: Option<ReviewStatus>,
}
