use std::cmp::Reverse;

use serde::Serialize;

use crate::core::error::Result;
use crate::features::reviews::dtos::{CreateReviewDto, UpdateReviewDto};
use crate::features::reviews::models::{Review, ReviewStatus, StatusFields};
use crate::modules::document_store::{Collection, Repository};
use crate::shared::timestamp;

/// Document fields plus the status pair; `status` on the DTO is never serialized itself
#[derive(Serialize)]
struct ReviewWrite<'a, T: Serialize> {
    #[serde(flatten)]
    fields: &'a T,
    #[serde(flatten)]
    status: Option<StatusFields>,
}

pub struct ReviewService {
    repository: Repository,
}

impl ReviewService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Reviews newest first, optionally only those with `status`
    pub async fn get_reviews(&self, status: Option<ReviewStatus>) -> Result<Vec<Review>> {
        let mut reviews: Vec<Review> = self.repository.get_all(Collection::Reviews).await?;

        if let Some(status) = status {
            reviews.retain(|r| r.status == status);
        }
        reviews.sort_by_key(|r| Reverse(timestamp::or_epoch(r.created_at)));

        Ok(reviews)
    }

    /// Reviews whose stored `isApproved` flag is true, newest first
    pub async fn get_approved_reviews(&self) -> Result<Vec<Review>> {
        let mut reviews = self.get_reviews(None).await?;
        reviews.retain(|r| r.approved_flag);
        Ok(reviews)
    }

    pub async fn get_review(&self, id: &str) -> Result<Option<Review>> {
        Ok(self.repository.get_by_id(Collection::Reviews, id).await?)
    }

    /// Store a review with `status`, or its own requested status when `None`
    pub async fn create_review(
        &self,
        dto: CreateReviewDto,
        status: Option<ReviewStatus>,
    ) -> Result<String> {
        let status = status.or(dto.status).unwrap_or(ReviewStatus::Approved);
        let write = ReviewWrite {
            fields: &dto,
            status: Some(status.into()),
        };

        let id = self
            .repository
            .create(Collection::Reviews, &write)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create review: {:?}", e);
                e
            })?;

        tracing::info!("Review created: id={}, status={}", id, status.as_str());
        Ok(id)
    }

    pub async fn update_review(&self, id: &str, dto: UpdateReviewDto) -> Result<()> {
        let write = ReviewWrite {
            fields: &dto,
            status: dto.status.map(StatusFields::from),
        };

        self.repository
            .update(Collection::Reviews, id, &write)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update review {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Review updated: id={}", id);
        Ok(())
    }

    pub async fn set_review_status(&self, id: &str, status: ReviewStatus) -> Result<()> {
        self.repository
            .update(Collection::Reviews, id, &StatusFields::from(status))
            .await
            .map_err(|e| {
                tracing::error!("Failed to set status of review {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Review {} marked {}", id, status.as_str());
        Ok(())
    }

    pub async fn delete_review(&self, id: &str) -> Result<()> {
        self.repository
            .remove(Collection::Reviews, id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete review {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Review deleted: id={}", id);
        Ok(())
    }
}
