use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::{lenient, timestamp};

/// Moderation state of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Status of a stored review from its `status` field and legacy `isApproved` flag.
    ///
    /// A recognised `status` wins. Without one, `isApproved: true` means approved;
    /// otherwise an absent status is pending and an unknown one is rejected.
    pub fn resolve(status: Option<&str>, is_approved: Option<bool>) -> Self {
        match status {
            Some(value) => match Self::parse(value) {
                Some(status) => status,
                None if is_approved == Some(true) => Self::Approved,
                None => Self::Rejected,
            },
            None if is_approved == Some(true) => Self::Approved,
            None => Self::Pending,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Stored shape of a review document, carrying both status representations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDocument {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub country: String,
    /// 1 to 5
    #[serde(default, deserialize_with = "lenient::integer")]
    pub rating: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_approved: Option<bool>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A customer testimonial
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ReviewDocument", into = "ReviewDocument")]
pub struct Review {
    pub id: String,
    pub name: String,
    pub company: String,
    pub country: String,
    pub rating: i64,
    pub content: String,
    pub image: Option<String>,
    pub status: ReviewStatus,
    /// Stored `isApproved`; the public listing is gated on this flag alone
    pub approved_flag: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ReviewDocument> for Review {
    fn from(doc: ReviewDocument) -> Self {
        Self {
            status: ReviewStatus::resolve(doc.status.as_deref(), doc.is_approved),
            approved_flag: doc.is_approved == Some(true),
            id: doc.id,
            name: doc.name,
            company: doc.company,
            country: doc.country,
            rating: doc.rating,
            content: doc.content,
            image: doc.image,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl From<Review> for ReviewDocument {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            name: review.name,
            company: review.company,
            country: review.country,
            rating: review.rating,
            content: review.content,
            image: review.image,
            status: Some(review.status.as_str().to_string()),
            is_approved: Some(review.approved_flag),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

/// Status fields written alongside any status change
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFields {
    pub status: ReviewStatus,
    pub is_approved: bool,
}

impl From<ReviewStatus> for StatusFields {
    fn from(status: ReviewStatus) -> Self {
        Self {
            status,
            is_approved: status.is_approved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Review {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_explicit_status_wins() {
        assert_eq!(
            ReviewStatus::resolve(Some("pending"), Some(true)),
            ReviewStatus::Pending
        );
        assert_eq!(
            ReviewStatus::resolve(Some("rejected"), Some(true)),
            ReviewStatus::Rejected
        );
        assert_eq!(
            ReviewStatus::resolve(Some("approved"), None),
            ReviewStatus::Approved
        );
    }

    #[test]
    fn test_legacy_flag_without_status() {
        assert_eq!(ReviewStatus::resolve(None, Some(true)), ReviewStatus::Approved);
        assert_eq!(ReviewStatus::resolve(None, Some(false)), ReviewStatus::Pending);
        assert_eq!(ReviewStatus::resolve(None, None), ReviewStatus::Pending);
    }

    #[test]
    fn test_unknown_status_is_not_pending() {
        assert_eq!(
            ReviewStatus::resolve(Some("spam"), None),
            ReviewStatus::Rejected
        );
        assert_eq!(
            ReviewStatus::resolve(Some("spam"), Some(true)),
            ReviewStatus::Approved
        );
    }

    #[test]
    fn test_review_serializes_both_representations() {
        let review = decode(json!({"id": "r1", "name": "Ana", "rating": 5, "isApproved": true}));
        assert_eq!(review.status, ReviewStatus::Approved);
        assert!(review.approved_flag);

        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["status"], "approved");
        assert_eq!(value["isApproved"], true);
        assert_eq!(value["company"], "");
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_flag_is_kept_apart_from_status() {
        let review = decode(json!({"id": "r2", "status": "pending", "isApproved": true}));
        assert_eq!(review.status, ReviewStatus::Pending);
        assert!(review.approved_flag);

        let review = decode(json!({"id": "r3", "status": "approved", "rating": "4"}));
        assert_eq!(review.status, ReviewStatus::Approved);
        assert!(!review.approved_flag);
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn test_status_fields_follow_status() {
        let fields = serde_json::to_value(StatusFields::from(ReviewStatus::Rejected)).unwrap();
        assert_eq!(fields, json!({"status": "rejected", "isApproved": false}));
    }
}
