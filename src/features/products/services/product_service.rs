use std::cmp::Reverse;

use crate::core::error::Result;
use crate::features::products::dtos::{CreateProductDto, UpdateProductDto};
use crate::features::products::models::Product;
use crate::modules::document_store::{Collection, Repository};
use crate::shared::constants::FEATURED_PRODUCTS_LIMIT;
use crate::shared::timestamp;
use crate::shared::validation::slugify;

/// Newest first; products without `createdAt` sort last
fn sort_newest_first(products: &mut [Product]) {
    products.sort_by_key(|p| Reverse(timestamp::or_epoch(p.created_at)));
}

pub struct ProductService {
    repository: Repository,
}

impl ProductService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Products newest first, optionally restricted to active ones and one category
    pub async fn get_products(
        &self,
        active_only: bool,
        category_id: Option<&str>,
    ) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self.repository.get_all(Collection::Products).await?;

        products.retain(|p| {
            (!active_only || p.is_active) && category_id.is_none_or(|c| p.category_id == c)
        });
        sort_newest_first(&mut products);

        Ok(products)
    }

    /// Up to six active featured products, newest first
    pub async fn get_featured_products(&self) -> Result<Vec<Product>> {
        let mut products = self.get_products(true, None).await?;
        products.retain(|p| p.is_featured);
        products.truncate(FEATURED_PRODUCTS_LIMIT);
        Ok(products)
    }

    pub async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.repository.get_by_id(Collection::Products, id).await?)
    }

    /// Active product with the given slug
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let products = self.get_products(true, None).await?;
        Ok(products.into_iter().find(|p| p.slug == slug))
    }

    pub async fn create_product(&self, mut dto: CreateProductDto) -> Result<String> {
        if dto.slug.is_none() {
            dto.slug = Some(slugify(&dto.name));
        }

        let id = self
            .repository
            .create(Collection::Products, &dto)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create product: {:?}", e);
                e
            })?;

        tracing::info!("Product created: id={}, category={}", id, dto.category_id);
        Ok(id)
    }

    pub async fn update_product(&self, id: &str, dto: UpdateProductDto) -> Result<()> {
        self.repository
            .update(Collection::Products, id, &dto)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update product {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Product updated: id={}", id);
        Ok(())
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.repository
            .remove(Collection::Products, id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::dtos::CreateCategoryDto;
    use crate::features::categories::CategoryService;
    use crate::modules::document_store::{Document, DocumentStore, InMemoryDocumentStore};
    use crate::shared::test_helpers::memory_repository;
    use chrono::{Duration, TimeZone, Utc};
    use fake::faker::lorem::en::Words;
    use fake::Fake;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn dto(name: &str, category_id: &str) -> CreateProductDto {
        CreateProductDto {
            name: name.to_string(),
            description: String::new(),
            category_id: category_id.to_string(),
            images: vec![],
            videos: vec![],
            specifications: BTreeMap::new(),
            min_order_quantity: 1,
            unit: "kg".to_string(),
            slug: None,
            is_featured: false,
            is_active: true,
        }
    }

    /// Store with products stamped one minute apart, in the given order
    async fn seeded(products: &[(bool, bool)]) -> (ProductService, Vec<String>) {
        let store = Arc::new(InMemoryDocumentStore::new());
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut ids = Vec::new();

        for (i, (is_active, is_featured)) in products.iter().enumerate() {
            let id = format!("p{}", i);
            let at = base + Duration::minutes(i as i64);
            let name: Vec<String> = Words(2..3).fake();
            store
                .insert_raw(
                    Collection::Products,
                    Document {
                        id: id.clone(),
                        data: json!({
                            "name": name.join(" "),
                            "categoryId": "c1",
                            "isActive": is_active,
                            "isFeatured": is_featured,
                        })
                        .as_object()
                        .cloned()
                        .unwrap(),
                        created_at: Some(at),
                        updated_at: Some(at),
                    },
                )
                .await;
            ids.push(id);
        }

        (ProductService::new(Repository::new(store)), ids)
    }

    #[tokio::test]
    async fn test_featured_products_are_capped_active_and_newest_first() {
        let mut flags = vec![(true, true); 8];
        flags.push((false, true));
        flags.push((true, false));
        let (service, ids) = seeded(&flags).await;

        let featured = service.get_featured_products().await.unwrap();
        assert_eq!(featured.len(), FEATURED_PRODUCTS_LIMIT);
        assert!(featured.iter().all(|p| p.is_active && p.is_featured));

        let got: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = ids[2..8].iter().rev().map(String::as_str).collect();
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn test_featured_products_with_fewer_candidates() {
        let (service, _) = seeded(&[(true, true), (false, true), (true, false)]).await;
        let featured = service.get_featured_products().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "p0");
    }

    #[tokio::test]
    async fn test_missing_created_at_sorts_last() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .insert_raw(
                Collection::Products,
                Document {
                    id: "legacy".to_string(),
                    data: json!({"name": "Legacy", "isActive": true})
                        .as_object()
                        .cloned()
                        .unwrap(),
                    created_at: None,
                    updated_at: None,
                },
            )
            .await;
        store
            .insert(
                Collection::Products,
                json!({"name": "New", "isActive": true})
                    .as_object()
                    .cloned()
                    .unwrap(),
            )
            .await
            .unwrap();
        let service = ProductService::new(Repository::new(store));

        let names: Vec<String> = service
            .get_products(true, None)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["New", "Legacy"]);
    }

    #[tokio::test]
    async fn test_filter_by_category_and_active() {
        let service = ProductService::new(memory_repository());
        service.create_product(dto("White Rice", "grains")).await.unwrap();
        service.create_product(dto("Tractor", "equipment")).await.unwrap();
        service
            .create_product(CreateProductDto {
                is_active: false,
                ..dto("Brown Rice", "grains")
            })
            .await
            .unwrap();

        let grains = service.get_products(false, Some("grains")).await.unwrap();
        assert_eq!(grains.len(), 2);

        let active_grains = service.get_products(true, Some("grains")).await.unwrap();
        assert_eq!(active_grains.len(), 1);
        assert_eq!(active_grains[0].name, "White Rice");

        assert_eq!(service.get_products(false, None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_deleting_category_leaves_products_untouched() {
        let repository = memory_repository();
        let categories = CategoryService::new(repository.clone());
        let products = ProductService::new(repository);

        let category_id = categories
            .create_category(CreateCategoryDto {
                name: "Rice".to_string(),
                description: String::new(),
                image: String::new(),
                slug: None,
                is_active: true,
                order: 0,
            })
            .await
            .unwrap();
        let product_id = products
            .create_product(dto("Jasmine Rice", &category_id))
            .await
            .unwrap();

        categories.delete_category(&category_id).await.unwrap();

        let product = products.get_product(&product_id).await.unwrap().unwrap();
        assert_eq!(product.category_id, category_id);
        assert!(categories.get_category(&category_id).await.unwrap().is_none());
        assert_eq!(
            products
                .get_products(true, Some(&category_id))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_slug_lookup_and_partial_update() {
        let service = ProductService::new(memory_repository());
        let mut specifications = BTreeMap::new();
        specifications.insert("Moisture".to_string(), "14%".to_string());
        let id = service
            .create_product(CreateProductDto {
                specifications,
                ..dto("Jasmine Rice 5%", "grains")
            })
            .await
            .unwrap();

        let product = service
            .get_product_by_slug("jasmine-rice-5")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.specifications["Moisture"], "14%");

        service
            .update_product(
                &id,
                UpdateProductDto {
                    is_featured: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let updated = service.get_product(&id).await.unwrap().unwrap();
        assert!(updated.is_featured);
        assert_eq!(updated.unit, "kg");
        assert_eq!(updated.specifications.len(), 1);
    }

    #[tokio::test]
    async fn test_mistyped_fields_do_not_hide_products() {
        let store = Arc::new(InMemoryDocumentStore::new());
        for (id, data) in [
            ("ok", json!({"name": "Rice", "isActive": true, "minOrderQuantity": 5})),
            ("moq-string", json!({"name": "Pepper", "isActive": true, "minOrderQuantity": "100"})),
            ("moq-float", json!({"name": "Coffee", "isActive": true, "minOrderQuantity": 1.0})),
            (
                "spec-number",
                json!({"name": "Cashew", "isActive": true, "specifications": {"Moisture": 14}}),
            ),
        ] {
            store
                .insert_raw(
                    Collection::Products,
                    Document {
                        id: id.to_string(),
                        data: data.as_object().cloned().unwrap(),
                        created_at: None,
                        updated_at: None,
                    },
                )
                .await;
        }
        let service = ProductService::new(Repository::new(store));

        let products = service.get_products(false, None).await.unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "moq-string", "moq-float", "spec-number"]);

        let by_id = |id: &str| products.iter().find(|p| p.id == id).unwrap();
        assert_eq!(by_id("moq-string").min_order_quantity, 100);
        assert_eq!(by_id("moq-float").min_order_quantity, 1);
        assert_eq!(by_id("spec-number").specifications["Moisture"], "14");
    }
}
