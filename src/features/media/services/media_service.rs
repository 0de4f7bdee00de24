use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::media::dtos::{MediaEntity, MediaResponseDto};
use crate::modules::storage::{media_key, ObjectStorage};
use crate::shared::constants::{ALLOWED_MEDIA_TYPES, MAX_MEDIA_SIZE};

/// Upload and delete catalog media in object storage
pub struct MediaService {
    storage: Arc<dyn ObjectStorage>,
}

impl MediaService {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    pub async fn upload(
        &self,
        entity: MediaEntity,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<MediaResponseDto> {
        if data.is_empty() {
            return Err(AppError::BadRequest("File is empty".to_string()));
        }
        if data.len() > MAX_MEDIA_SIZE {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {} MB",
                MAX_MEDIA_SIZE / 1024 / 1024
            )));
        }
        if !ALLOWED_MEDIA_TYPES.contains(&content_type) {
            return Err(AppError::BadRequest(format!(
                "File type '{}' is not allowed. Allowed types: {}",
                content_type,
                ALLOWED_MEDIA_TYPES.join(", ")
            )));
        }

        let key = media_key(
            self.storage.public_prefix(),
            entity.as_str(),
            file_name,
            Utc::now(),
        );
        let size = data.len();
        let url = self.storage.upload(&key, data, content_type).await?;

        tracing::info!("Media uploaded: key={}, size={}", key, size);
        Ok(MediaResponseDto {
            url,
            key,
            content_type: content_type.to_string(),
            size,
        })
    }

    /// Delete an object previously returned by [`MediaService::upload`]
    pub async fn delete_by_url(&self, url: &str) -> Result<()> {
        let key = self
            .storage
            .key_from_url(url)
            .filter(|key| key.starts_with(&format!("{}/", self.storage.public_prefix())))
            .ok_or_else(|| {
                AppError::BadRequest("URL does not point to an uploaded media file".to_string())
            })?;

        self.storage.delete(&key).await?;

        tracing::info!("Media deleted: key={}", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{MemoryObjectStorage, MEMORY_STORAGE_URL as BASE_URL};

    #[tokio::test]
    async fn test_upload_then_delete_by_url() {
        let storage = Arc::new(MemoryObjectStorage::default());
        let service = MediaService::new(storage.clone());

        let media = service
            .upload(MediaEntity::Products, "Rice Bag.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        assert!(media.key.starts_with("public/products/"));
        assert!(media.key.ends_with("-Rice_Bag.png"));
        assert_eq!(media.size, 3);
        assert!(storage.objects.lock().unwrap().contains_key(&media.key));

        service.delete_by_url(&media.url).await.unwrap();
        assert!(storage.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_disallowed_type_and_empty_file() {
        let service = MediaService::new(Arc::new(MemoryObjectStorage::default()));
        assert!(matches!(
            service
                .upload(MediaEntity::Content, "doc.pdf", "application/pdf", vec![1])
                .await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service
                .upload(MediaEntity::Content, "a.png", "image/png", vec![])
                .await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_rejects_foreign_urls() {
        let service = MediaService::new(Arc::new(MemoryObjectStorage::default()));
        assert!(service
            .delete_by_url("https://elsewhere.example/public/a.png")
            .await
            .is_err());
        assert!(service
            .delete_by_url(&format!("{}/private/secret.png", BASE_URL))
            .await
            .is_err());
    }
}
