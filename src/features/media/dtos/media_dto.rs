use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Folder a media file is stored under, one per entity type that references media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaEntity {
    Categories,
    Products,
    Reviews,
    Clients,
    Content,
}

impl MediaEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Products => "products",
            Self::Reviews => "reviews",
            Self::Clients => "clients",
            Self::Content => "content",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "categories" => Some(Self::Categories),
            "products" => Some(Self::Products),
            "reviews" => Some(Self::Reviews),
            "clients" => Some(Self::Clients),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

/// Upload form for OpenAPI documentation.
/// The handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadMediaDto {
    /// The image or video to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Owning entity type, e.g. "products"
    #[schema(example = "products")]
    pub entity: String,
}

/// Stored media object
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponseDto {
    /// Public URL to store in the owning document
    pub url: String,
    /// Object key inside the bucket
    pub key: String,
    pub content_type: String,
    /// Size in bytes
    pub size: usize,
}

/// Request DTO for deleting a media object by its public URL
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteMediaDto {
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}
