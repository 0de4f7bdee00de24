use std::cmp::Reverse;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::clients::models::Client;
use crate::features::contacts::models::ContactSubmission;
use crate::features::dashboard::dtos::*;
use crate::features::products::models::Product;
use crate::features::reviews::models::{Review, ReviewStatus};
use crate::modules::document_store::{Collection, Repository};
use crate::shared::constants::RECENT_ITEMS_LIMIT;
use crate::shared::timestamp;

/// Service for the back-office dashboard
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Read every collection concurrently and aggregate in memory.
    ///
    /// Any failed read fails the whole summary.
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let (categories, products, reviews, contacts, clients) = tokio::try_join!(
            self.repository.get_all::<Category>(Collection::Categories),
            self.repository.get_all::<Product>(Collection::Products),
            self.repository.get_all::<Review>(Collection::Reviews),
            self.repository.get_all::<ContactSubmission>(Collection::Contacts),
            self.repository.get_all::<Client>(Collection::Clients),
        )
        .map_err(|e| {
            tracing::error!("Failed to load dashboard data: {:?}", e);
            e
        })?;

        Ok(summarize(categories, products, reviews, contacts, clients))
    }
}

fn summarize(
    categories: Vec<Category>,
    products: Vec<Product>,
    mut reviews: Vec<Review>,
    mut contacts: Vec<ContactSubmission>,
    clients: Vec<Client>,
) -> DashboardSummaryDto {
    let count_status =
        |status: ReviewStatus| reviews.iter().filter(|r| r.status == status).count();

    let approved_ratings: Vec<i64> = reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Approved)
        .map(|r| r.rating)
        .collect();
    let average_rating = if approved_ratings.is_empty() {
        0.0
    } else {
        approved_ratings.iter().sum::<i64>() as f64 / approved_ratings.len() as f64
    };

    let review_stats = ReviewStats {
        total: reviews.len(),
        pending: count_status(ReviewStatus::Pending),
        approved: approved_ratings.len(),
        rejected: count_status(ReviewStatus::Rejected),
        average_rating,
    };

    let contact_stats = ContactStats {
        total: contacts.len(),
        unread: contacts.iter().filter(|c| !c.is_read).count(),
        replied: contacts.iter().filter(|c| c.is_replied()).count(),
    };

    contacts.sort_by_key(|c| Reverse(timestamp::or_epoch(c.created_at)));
    contacts.truncate(RECENT_ITEMS_LIMIT);

    reviews.retain(|r| r.status == ReviewStatus::Pending);
    reviews.sort_by_key(|r| Reverse(timestamp::or_epoch(r.created_at)));
    reviews.truncate(RECENT_ITEMS_LIMIT);

    DashboardSummaryDto {
        categories: CategoryStats {
            total: categories.len(),
            active: categories.iter().filter(|c| c.is_active).count(),
        },
        products: ProductStats {
            total: products.len(),
            active: products.iter().filter(|p| p.is_active).count(),
            featured: products.iter().filter(|p| p.is_featured).count(),
        },
        reviews: review_stats,
        contacts: contact_stats,
        clients: ClientStats {
            total: clients.len(),
            active: clients.iter().filter(|c| c.is_active).count(),
        },
        recent_contacts: contacts,
        pending_reviews: reviews,
    }
}
