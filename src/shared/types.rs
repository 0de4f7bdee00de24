use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl Meta {
    pub fn total(count: usize) -> Self {
        Self {
            total: count as i64,
        }
    }
}

/// Body of a successful create: the id assigned by the document store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub id: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload, used by update and delete endpoints
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(None, Some(message.into()), None)
    }
}

impl ApiResponse<CreatedDto> {
    pub fn created(id: String) -> Self {
        Self::success(
            Some(CreatedDto { id }),
            Some("Created successfully".to_string()),
            None,
        )
    }
}
