use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::{CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;
use crate::modules::query_cache::{Entity, QueryClient, QueryKey};

/// Cached category reads plus writes that invalidate them
pub struct CategoryViewModel {
    service: Arc<CategoryService>,
    cache: QueryClient,
}

impl CategoryViewModel {
    pub fn new(service: Arc<CategoryService>, cache: QueryClient) -> Self {
        Self { service, cache }
    }

    pub async fn categories(&self, active_only: bool) -> Result<Arc<Vec<Category>>> {
        let service = self.service.clone();
        self.cache
            .fetch(
                QueryKey::new(Entity::Categories, format!("list:active={}", active_only)),
                move || async move { service.get_categories(active_only).await },
            )
            .await
    }

    pub async fn category(&self, id: &str) -> Result<Arc<Option<Category>>> {
        let service = self.service.clone();
        let id = id.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Categories, format!("id={}", id)),
                move || async move { service.get_category(&id).await },
            )
            .await
    }

    pub async fn category_by_slug(&self, slug: &str) -> Result<Arc<Option<Category>>> {
        let service = self.service.clone();
        let slug = slug.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Categories, format!("slug={}", slug)),
                move || async move { service.get_category_by_slug(&slug).await },
            )
            .await
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<String> {
        let id = self.service.create_category(dto).await?;
        self.cache.invalidate(&[Entity::Categories, Entity::Dashboard]);
        Ok(id)
    }

    pub async fn update(&self, id: &str, dto: UpdateCategoryDto) -> Result<()> {
        self.service.update_category(id, dto).await?;
        self.cache.invalidate(&[Entity::Categories, Entity::Dashboard]);
        Ok(())
    }

    /// Product lists are invalidated too since they may show the category
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.service.delete_category(id).await?;
        self.cache.invalidate(&[
            Entity::Categories,
            Entity::Products,
            Entity::Dashboard,
        ]);
        Ok(())
    }
}
