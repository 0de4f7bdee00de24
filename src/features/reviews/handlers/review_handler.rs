use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::reviews::dtos::{
    CreateReviewDto, ReviewListQuery, ReviewStatusDto, UpdateReviewDto,
};
use crate::features::reviews::models::{Review, ReviewDocument};
use crate::features::reviews::services::ReviewViewModel;
use crate::shared::types::{ApiResponse, CreatedDto, Meta};

fn list_response(reviews: Arc<Vec<Review>>) -> Json<ApiResponse<Vec<Review>>> {
    let total = reviews.len();
    Json(ApiResponse::success(
        Some(reviews.as_ref().clone()),
        None,
        Some(Meta::total(total)),
    ))
}

/// List approved reviews, newest first
#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "Approved reviews", body = ApiResponse<Vec<ReviewDocument>>),
    ),
    tag = "reviews"
)]
pub async fn list_approved_reviews(
    State(vm): State<Arc<ReviewViewModel>>,
) -> Result<Json<ApiResponse<Vec<Review>>>> {
    let reviews = vm.approved_reviews().await?;
    Ok(list_response(reviews))
}

/// Submit a review for moderation
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review submitted", body = ApiResponse<CreatedDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "reviews"
)]
pub async fn submit_review(
    State(vm): State<Arc<ReviewViewModel>>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>)> {
    dto.validate()?;

    let id = vm.submit(dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id))))
}

/// List reviews (admin)
#[utoipa::path(
    get,
    path = "/api/admin/reviews",
    params(ReviewListQuery),
    responses(
        (status = 200, description = "Reviews, newest first", body = ApiResponse<Vec<ReviewDocument>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-reviews",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_reviews(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ReviewViewModel>>,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<ApiResponse<Vec<Review>>>> {
    let reviews = vm.reviews(query.status).await?;
    Ok(list_response(reviews))
}

/// Get a review (admin)
#[utoipa::path(
    get,
    path = "/api/admin/reviews/{id}",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Review found", body = ApiResponse<ReviewDocument>),
        (status = 404, description = "Review not found")
    ),
    tag = "admin-reviews",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_review(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ReviewViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Review>>> {
    let review = vm
        .review(&id)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

/// Create a review (admin); approved unless a status is given
#[utoipa::path(
    post,
    path = "/api/admin/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<CreatedDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-reviews",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_review(
    admin: AuthenticatedAdmin,
    State(vm): State<Arc<ReviewViewModel>>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>)> {
    dto.validate()?;

    let id = vm.create(dto).await?;
    tracing::info!("Admin {} created review {}", admin.uid, id);
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id))))
}

/// Update a review
#[utoipa::path(
    put,
    path = "/api/admin/reviews/{id}",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Review not found")
    ),
    tag = "admin-reviews",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_review(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ReviewViewModel>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateReviewDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()?;

    vm.update(&id, dto).await?;
    Ok(Json(ApiResponse::message("Review updated successfully")))
}

/// Approve, reject or reset a review to pending
#[utoipa::path(
    put,
    path = "/api/admin/reviews/{id}/status",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    request_body = ReviewStatusDto,
    responses(
        (status = 200, description = "Status changed"),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Review not found")
    ),
    tag = "admin-reviews",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn set_review_status(
    admin: AuthenticatedAdmin,
    State(vm): State<Arc<ReviewViewModel>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<ReviewStatusDto>,
) -> Result<Json<ApiResponse<()>>> {
    vm.set_status(&id, dto.status).await?;
    tracing::info!(
        "Admin {} set review {} to {}",
        admin.uid,
        id,
        dto.status.as_str()
    );
    Ok(Json(ApiResponse::message("Review status updated")))
}

/// Delete a review
#[utoipa::path(
    delete,
    path = "/api/admin/reviews/{id}",
    params(
        ("id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-reviews",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_review(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ReviewViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    vm.delete(&id).await?;
    Ok(Json(ApiResponse::message("Review deleted successfully")))
}
