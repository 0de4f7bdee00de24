use std::sync::Arc;

use serde_json::Value;

use crate::core::error::Result;
use crate::features::content::models::{CompanyInfo, SiteContent};
use crate::features::content::services::ContentService;
use crate::modules::query_cache::{Entity, QueryClient, QueryKey};

pub struct ContentViewModel {
    service: Arc<ContentService>,
    cache: QueryClient,
}

impl ContentViewModel {
    pub fn new(service: Arc<ContentService>, cache: QueryClient) -> Self {
        Self { service, cache }
    }

    pub async fn all_content(&self) -> Result<Arc<Vec<SiteContent>>> {
        let service = self.service.clone();
        self.cache
            .fetch(QueryKey::new(Entity::Content, "list"), move || async move {
                service.list_content().await
            })
            .await
    }

    pub async fn content(&self, key: &str) -> Result<Arc<Option<SiteContent>>> {
        let service = self.service.clone();
        let key = key.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Content, format!("key={}", key)),
                move || async move { service.get_content(&key).await },
            )
            .await
    }

    pub async fn company_info(&self) -> Result<Arc<CompanyInfo>> {
        let service = self.service.clone();
        self.cache
            .fetch(QueryKey::new(Entity::Content, "companyInfo"), move || async move {
                service.get_company_info().await
            })
            .await
    }

    pub async fn update(&self, key: &str, value: Value) -> Result<String> {
        let id = self.service.update_content(key, value).await?;
        self.cache.invalidate(&[Entity::Content, Entity::Dashboard]);
        Ok(id)
    }
}
