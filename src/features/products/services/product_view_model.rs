use std::sync::Arc;

use crate::core::error::Result;
use crate::features::products::dtos::{CreateProductDto, UpdateProductDto};
use crate::features::products::models::Product;
use crate::features::products::services::ProductService;
use crate::modules::query_cache::{Entity, QueryClient, QueryKey};

pub struct ProductViewModel {
    service: Arc<ProductService>,
    cache: QueryClient,
}

impl ProductViewModel {
    pub fn new(service: Arc<ProductService>, cache: QueryClient) -> Self {
        Self { service, cache }
    }

    pub async fn products(
        &self,
        active_only: bool,
        category_id: Option<String>,
    ) -> Result<Arc<Vec<Product>>> {
        let service = self.service.clone();
        let key = QueryKey::new(
            Entity::Products,
            format!(
                "list:active={}:category={}",
                active_only,
                category_id.as_deref().unwrap_or("*")
            ),
        );
        self.cache
            .fetch(key, move || async move {
                service
                    .get_products(active_only, category_id.as_deref())
                    .await
            })
            .await
    }

    pub async fn featured_products(&self) -> Result<Arc<Vec<Product>>> {
        let service = self.service.clone();
        self.cache
            .fetch(QueryKey::new(Entity::Products, "featured"), move || async move {
                service.get_featured_products().await
            })
            .await
    }

    pub async fn product(&self, id: &str) -> Result<Arc<Option<Product>>> {
        let service = self.service.clone();
        let id = id.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Products, format!("id={}", id)),
                move || async move { service.get_product(&id).await },
            )
            .await
    }

    pub async fn product_by_slug(&self, slug: &str) -> Result<Arc<Option<Product>>> {
        let service = self.service.clone();
        let slug = slug.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Products, format!("slug={}", slug)),
                move || async move { service.get_product_by_slug(&slug).await },
            )
            .await
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<String> {
        let id = self.service.create_product(dto).await?;
        self.cache.invalidate(&[Entity::Products, Entity::Dashboard]);
        Ok(id)
    }

    pub async fn update(&self, id: &str, dto: UpdateProductDto) -> Result<()> {
        self.service.update_product(id, dto).await?;
        self.cache.invalidate(&[Entity::Products, Entity::Dashboard]);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.service.delete_product(id).await?;
        self.cache.invalidate(&[Entity::Products, Entity::Dashboard]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{memory_repository, test_query_client};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_failed_write_keeps_cache() {
        let vm = ProductViewModel::new(
            Arc::new(ProductService::new(memory_repository())),
            test_query_client(),
        );
        let first = vm.featured_products().await.unwrap();

        let err = vm
            .update(
                "missing",
                UpdateProductDto {
                    is_featured: Some(true),
                    ..Default::default()
                },
            )
            .await;
        assert!(err.is_err());

        let second = vm.featured_products().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        vm.create(CreateProductDto {
            name: "Jasmine Rice".to_string(),
            description: String::new(),
            category_id: "grains".to_string(),
            images: vec![],
            videos: vec![],
            specifications: BTreeMap::new(),
            min_order_quantity: 1,
            unit: "kg".to_string(),
            slug: None,
            is_featured: true,
            is_active: true,
        })
        .await
        .unwrap();

        let third = vm.featured_products().await.unwrap();
        assert_eq!(third.len(), 1);
    }
}
