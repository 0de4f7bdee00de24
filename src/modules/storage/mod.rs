//! Object storage for catalog media
//!
//! Uploaded images and videos live under `<public prefix>/<entity>/` in an
//! S3-compatible bucket and are referenced from documents by public URL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::error::AppError;

mod minio_client;

pub use minio_client::MinIOClient;

/// Upload and delete operations consumed by the media feature
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store bytes under `key` and return the public URL of the object
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> Result<String, AppError>;

    /// Delete an object; a missing object is not an error
    async fn delete(&self, key: &str) -> Result<(), AppError>;

    /// Map a public URL produced by [`ObjectStorage::upload`] back to its key
    fn key_from_url(&self, url: &str) -> Option<String>;

    /// Prefix every uploaded key starts with (e.g., "public")
    fn public_prefix(&self) -> &str;
}

/// Build a collision-free object key: `<prefix>/<entity>/<millis>-<name>`
pub fn media_key(prefix: &str, entity: &str, file_name: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}/{}/{}-{}",
        prefix,
        entity,
        now.timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

/// Keep ASCII letters, digits, dots, dashes and underscores; everything else
/// becomes an underscore. Path separators never survive.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = sanitized.trim_start_matches('.').to_string();
    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_key_is_namespaced_by_entity_and_time() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(
            media_key("public", "products", "Rice Bag.png", now),
            "public/products/1700000000123-Rice_Bag.png"
        );
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("photo.jpg"), "photo.jpg");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\logo.svg"), "logo.svg");
        assert_eq!(sanitize_file_name("fête d'été.png"), "f_te_d__t_.png");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name(""), "file");
    }
}
