use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for storing a content value under a key
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateContentDto {
    /// Free-form JSON; `companyInfo` must be an object
    pub value: serde_json::Value,
}
