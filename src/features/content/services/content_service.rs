use serde::Serialize;
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::content::models::{CompanyInfo, SiteContent};
use crate::modules::document_store::{Collection, Repository};
use crate::shared::constants::{CONTENT_COMPANY_INFO, WELL_KNOWN_CONTENT_KEYS};
use crate::shared::timestamp;
use crate::shared::validation::CONTENT_KEY_REGEX;

#[derive(Serialize)]
struct ContentWrite<'a> {
    key: &'a str,
    value: &'a Value,
}

pub struct ContentService {
    repository: Repository,
}

impl ContentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All content documents ordered by key
    pub async fn list_content(&self) -> Result<Vec<SiteContent>> {
        let mut content: Vec<SiteContent> = self.repository.get_all(Collection::Content).await?;
        content.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(content)
    }

    /// Content stored under `key`; the most recently updated wins if a key was duplicated
    pub async fn get_content(&self, key: &str) -> Result<Option<SiteContent>> {
        let content: Vec<SiteContent> = self.repository.get_all(Collection::Content).await?;
        Ok(content
            .into_iter()
            .filter(|c| c.key == key)
            .max_by_key(|c| timestamp::or_epoch(c.updated_at)))
    }

    /// Upsert by key: update the existing document or create one. Returns its id.
    pub async fn update_content(&self, key: &str, value: Value) -> Result<String> {
        if !CONTENT_KEY_REGEX.is_match(key) {
            return Err(AppError::Validation(format!("Invalid content key '{}'", key)));
        }
        if key == CONTENT_COMPANY_INFO && !value.is_object() {
            return Err(AppError::Validation(
                "Company info must be a JSON object".to_string(),
            ));
        }
        if !WELL_KNOWN_CONTENT_KEYS.contains(&key) {
            tracing::info!("Storing custom content key '{}'", key);
        }

        let write = ContentWrite { key, value: &value };
        let result = match self.get_content(key).await? {
            Some(existing) => self
                .repository
                .update(Collection::Content, &existing.id, &write)
                .await
                .map(|_| existing.id.clone()),
            None => self.repository.create(Collection::Content, &write).await,
        };

        let id = result.map_err(|e| {
            tracing::error!("Failed to store content '{}': {:?}", key, e);
            e
        })?;

        tracing::info!("Content '{}' stored: id={}", key, id);
        Ok(id)
    }

    pub async fn get_company_info(&self) -> Result<CompanyInfo> {
        Ok(self
            .get_content(CONTENT_COMPANY_INFO)
            .await?
            .map(|content| CompanyInfo::from_value(&content.value))
            .unwrap_or_default())
    }
}
