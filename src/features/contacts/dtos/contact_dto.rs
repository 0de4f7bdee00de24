use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for a public contact or quote request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Defaults to `general`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[validate(length(min = 10, max = 5000, message = "Message must be 10-5000 characters"))]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// Request DTO for recording a reply
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplyContactDto {
    #[validate(length(min = 1, max = 2000, message = "Reply note must be 1-2000 characters"))]
    pub note: String,
}

/// Query params for the admin contact list
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ContactListQuery {
    /// Only return unread submissions
    #[serde(default)]
    pub unread_only: bool,
}
