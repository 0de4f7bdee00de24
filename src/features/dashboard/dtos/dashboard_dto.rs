use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::contacts::models::ContactSubmission;
use crate::features::reviews::models::{Review, ReviewDocument};

// ============================================================================
// Per-entity counts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryStats {
    pub total: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductStats {
    pub total: usize,
    pub active: usize,
    pub featured: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Mean rating of approved reviews; 0 when there are none
    pub average_rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactStats {
    pub total: usize,
    pub unread: usize,
    pub replied: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientStats {
    pub total: usize,
    pub active: usize,
}

// ============================================================================
// Summary
// ============================================================================

/// Back-office overview computed from every collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub categories: CategoryStats,
    pub products: ProductStats,
    pub reviews: ReviewStats,
    pub contacts: ContactStats,
    pub clients: ClientStats,
    /// Newest contact submissions
    pub recent_contacts: Vec<ContactSubmission>,
    /// Newest reviews awaiting moderation
    #[schema(value_type = Vec<ReviewDocument>)]
    pub pending_reviews: Vec<Review>,
}
