use serde::Serialize;

use crate::core::error::Result;
use crate::features::categories::dtos::{CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::models::Category;
use crate::modules::document_store::{Collection, Repository};
use crate::shared::validation::slugify;

/// Stored shape of a new category
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewCategory<'a> {
    name: &'a str,
    description: &'a str,
    image: &'a str,
    slug: String,
    is_active: bool,
    order: i64,
}

/// Category queries and writes.
///
/// Reads fetch the whole collection and filter/sort in memory; collections are
/// expected to stay in the tens to low hundreds of documents.
pub struct CategoryService {
    repository: Repository,
}

impl CategoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Categories ordered by `order` ascending; ties keep store order
    pub async fn get_categories(&self, active_only: bool) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self.repository.get_all(Collection::Categories).await?;

        if active_only {
            categories.retain(|c| c.is_active);
        }
        categories.sort_by_key(|c| c.order);

        Ok(categories)
    }

    pub async fn get_category(&self, id: &str) -> Result<Option<Category>> {
        Ok(self.repository.get_by_id(Collection::Categories, id).await?)
    }

    /// Active category with the given slug
    pub async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let categories = self.get_categories(true).await?;
        Ok(categories.into_iter().find(|c| c.slug == slug))
    }

    pub async fn create_category(&self, dto: CreateCategoryDto) -> Result<String> {
        let slug = dto.slug.clone().unwrap_or_else(|| slugify(&dto.name));
        self.warn_on_duplicate_slug(&slug, None).await;

        let category = NewCategory {
            name: &dto.name,
            description: &dto.description,
            image: &dto.image,
            slug,
            is_active: dto.is_active,
            order: dto.order,
        };

        let id = self
            .repository
            .create(Collection::Categories, &category)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category: {:?}", e);
                e
            })?;

        tracing::info!("Category created: id={}, slug={}", id, category.slug);
        Ok(id)
    }

    pub async fn update_category(&self, id: &str, dto: UpdateCategoryDto) -> Result<()> {
        if let Some(slug) = &dto.slug {
            self.warn_on_duplicate_slug(slug, Some(id)).await;
        }

        self.repository
            .update(Collection::Categories, id, &dto)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update category {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Category updated: id={}", id);
        Ok(())
    }

    /// Products referencing the category keep their now dangling `categoryId`
    pub async fn delete_category(&self, id: &str) -> Result<()> {
        self.repository
            .remove(Collection::Categories, id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }

    /// Slugs should be unique among active categories; the store does not enforce it
    async fn warn_on_duplicate_slug(&self, slug: &str, except_id: Option<&str>) {
        match self.get_categories(true).await {
            Ok(categories) => {
                if categories
                    .iter()
                    .any(|c| c.slug == slug && Some(c.id.as_str()) != except_id)
                {
                    tracing::warn!("Another active category already uses slug '{}'", slug);
                }
            }
            Err(e) => tracing::debug!("Skipped slug check for '{}': {}", slug, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::document_store::{Document, InMemoryDocumentStore};
    use crate::shared::test_helpers::memory_repository;
    use serde_json::json;
    use std::sync::Arc;

    fn create_dto(name: &str, order: i64, is_active: bool) -> CreateCategoryDto {
        CreateCategoryDto {
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            slug: None,
            is_active,
            order,
        }
    }

    #[tokio::test]
    async fn test_categories_sorted_by_order() {
        let service = CategoryService::new(memory_repository());
        service.create_category(create_dto("Rice", 2, true)).await.unwrap();
        service
            .create_category(create_dto("Equipment", 1, true))
            .await
            .unwrap();

        let names: Vec<String> = service
            .get_categories(false)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Equipment", "Rice"]);
    }

    #[tokio::test]
    async fn test_active_only_filters_and_all_includes_inactive() {
        let service = CategoryService::new(memory_repository());
        service.create_category(create_dto("Rice", 0, true)).await.unwrap();
        service
            .create_category(create_dto("Archived", 0, false))
            .await
            .unwrap();

        let active = service.get_categories(true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert!(active.iter().all(|c| c.is_active));

        let all = service.get_categories(false).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_order_defaults_to_zero_and_ties_are_stable() {
        let store = Arc::new(InMemoryDocumentStore::new());
        for (id, data) in [
            ("a", json!({"name": "A", "order": 1})),
            ("b", json!({"name": "B"})),
            ("c", json!({"name": "C", "order": 0})),
            ("d", json!({"name": "D"})),
        ] {
            store
                .insert_raw(
                    Collection::Categories,
                    Document {
                        id: id.to_string(),
                        data: data.as_object().cloned().unwrap(),
                        created_at: None,
                        updated_at: None,
                    },
                )
                .await;
        }
        let service = CategoryService::new(Repository::new(store));

        let ids: Vec<String> = service
            .get_categories(false)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["b", "c", "d", "a"]);
    }

    #[tokio::test]
    async fn test_string_order_is_read_as_number() {
        let store = Arc::new(InMemoryDocumentStore::new());
        for (id, data) in [
            ("first", json!({"name": "Rice", "order": "1", "isActive": true})),
            ("unreadable", json!({"name": "Tea", "order": "top", "isActive": true})),
            ("second", json!({"name": "Spices", "order": 2.0, "isActive": "true"})),
        ] {
            store
                .insert_raw(
                    Collection::Categories,
                    Document {
                        id: id.to_string(),
                        data: data.as_object().cloned().unwrap(),
                        created_at: None,
                        updated_at: None,
                    },
                )
                .await;
        }
        let service = CategoryService::new(Repository::new(store));

        let ids: Vec<String> = service
            .get_categories(true)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["unreadable", "first", "second"]);
    }

    #[tokio::test]
    async fn test_slug_is_derived_and_lookup_ignores_inactive() {
        let service = CategoryService::new(memory_repository());
        let id = service
            .create_category(create_dto("Farm Equipment", 0, true))
            .await
            .unwrap();
        service
            .create_category(CreateCategoryDto {
                slug: Some("old-stock".to_string()),
                ..create_dto("Old", 0, false)
            })
            .await
            .unwrap();

        let found = service
            .get_category_by_slug("farm-equipment")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, id);
        assert!(service
            .get_category_by_slug("old-stock")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_accepted() {
        let service = CategoryService::new(memory_repository());
        service.create_category(create_dto("Rice", 0, true)).await.unwrap();
        service.create_category(create_dto("Rice", 1, true)).await.unwrap();

        assert_eq!(service.get_categories(true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_only_touches_given_fields() {
        let service = CategoryService::new(memory_repository());
        let id = service
            .create_category(CreateCategoryDto {
                description: "Grains".to_string(),
                ..create_dto("Rice", 3, true)
            })
            .await
            .unwrap();
        let before = service.get_category(&id).await.unwrap().unwrap();

        service
            .update_category(
                &id,
                UpdateCategoryDto {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let after = service.get_category(&id).await.unwrap().unwrap();
        assert!(!after.is_active);
        assert_eq!(after.name, "Rice");
        assert_eq!(after.description, "Grains");
        assert_eq!(after.slug, "rice");
        assert_eq!(after.order, 3);
        assert!(after.updated_at > before.updated_at);
    }
}
