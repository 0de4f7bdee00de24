use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Request DTO for creating a client
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub country: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[validate(range(min = 0, message = "Order must not be negative"))]
    #[serde(default)]
    pub order: i64,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request DTO for a partial client update; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[validate(range(min = 0, message = "Order must not be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Query params for the admin client list
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ClientListQuery {
    /// Only return active clients
    #[serde(default)]
    pub active_only: bool,
}
