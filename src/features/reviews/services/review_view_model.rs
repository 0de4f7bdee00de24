use std::sync::Arc;

use crate::core::error::Result;
use crate::features::reviews::dtos::{CreateReviewDto, UpdateReviewDto};
use crate::features::reviews::models::{Review, ReviewStatus};
use crate::features::reviews::services::ReviewService;
use crate::modules::query_cache::{Entity, QueryClient, QueryKey};

pub struct ReviewViewModel {
    service: Arc<ReviewService>,
    cache: QueryClient,
}

impl ReviewViewModel {
    pub fn new(service: Arc<ReviewService>, cache: QueryClient) -> Self {
        Self { service, cache }
    }

    pub async fn reviews(&self, status: Option<ReviewStatus>) -> Result<Arc<Vec<Review>>> {
        let service = self.service.clone();
        let key = QueryKey::new(
            Entity::Reviews,
            format!("list:status={}", status.map_or("*", |s| s.as_str())),
        );
        self.cache
            .fetch(key, move || async move { service.get_reviews(status).await })
            .await
    }

    pub async fn approved_reviews(&self) -> Result<Arc<Vec<Review>>> {
        let service = self.service.clone();
        self.cache
            .fetch(
                QueryKey::new(Entity::Reviews, "list:approved"),
                move || async move { service.get_approved_reviews().await },
            )
            .await
    }

    pub async fn review(&self, id: &str) -> Result<Arc<Option<Review>>> {
        let service = self.service.clone();
        let id = id.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Reviews, format!("id={}", id)),
                move || async move { service.get_review(&id).await },
            )
            .await
    }

    /// Public submission, always pending until moderated
    pub async fn submit(&self, dto: CreateReviewDto) -> Result<String> {
        let id = self
            .service
            .create_review(dto, Some(ReviewStatus::Pending))
            .await?;
        self.cache.invalidate(&[Entity::Reviews, Entity::Dashboard]);
        Ok(id)
    }

    pub async fn create(&self, dto: CreateReviewDto) -> Result<String> {
        let id = self.service.create_review(dto, None).await?;
        self.cache.invalidate(&[Entity::Reviews, Entity::Dashboard]);
        Ok(id)
    }

    pub async fn update(&self, id: &str, dto: UpdateReviewDto) -> Result<()> {
        self.service.update_review(id, dto).await?;
        self.cache.invalidate(&[Entity::Reviews, Entity::Dashboard]);
        Ok(())
    }

    pub async fn set_status(&self, id: &str, status: ReviewStatus) -> Result<()> {
        self.service.set_review_status(id, status).await?;
        self.cache.invalidate(&[Entity::Reviews, Entity::Dashboard]);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.service.delete_review(id).await?;
        self.cache.invalidate(&[Entity::Reviews, Entity::Dashboard]);
        Ok(())
    }
}
