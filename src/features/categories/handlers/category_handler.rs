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
use crate::features::categories::dtos::{CategoryListQuery, CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryViewModel;
use crate::shared::types::{ApiResponse, CreatedDto, Meta};

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Category {} not found", id))
}

/// List active categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Active categories by display order", body = ApiResponse<Vec<Category>>),
    ),
    tag = "categories"
)]
pub async fn list_active_categories(
    State(vm): State<Arc<CategoryViewModel>>,
) -> Result<Json<ApiResponse<Vec<Category>>>> {
    let categories = vm.categories(true).await?;
    let total = categories.len();
    Ok(Json(ApiResponse::success(
        Some(categories.as_ref().clone()),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get an active category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = String, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_public_category(
    State(vm): State<Arc<CategoryViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>> {
    let category = vm
        .category(&id)
        .await?
        .as_ref()
        .clone()
        .filter(|c| c.is_active)
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Get an active category by slug
#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_by_slug(
    State(vm): State<Arc<CategoryViewModel>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Category>>> {
    let category = vm
        .category_by_slug(&slug)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// List all categories (admin)
#[utoipa::path(
    get,
    path = "/api/admin/categories",
    params(CategoryListQuery),
    responses(
        (status = 200, description = "Categories by display order", body = ApiResponse<Vec<Category>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_categories(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<CategoryViewModel>>,
    Query(query): Query<CategoryListQuery>,
) -> Result<Json<ApiResponse<Vec<Category>>>> {
    let categories = vm.categories(query.active_only).await?;
    let total = categories.len();
    Ok(Json(ApiResponse::success(
        Some(categories.as_ref().clone()),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get any category by id (admin)
#[utoipa::path(
    get,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = String, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "admin-categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_category(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<CategoryViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>> {
    let category = vm
        .category(&id)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CreatedDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    admin: AuthenticatedAdmin,
    State(vm): State<Arc<CategoryViewModel>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>)> {
    dto.validate()?;

    let id = vm.create(dto).await?;
    tracing::info!("Admin {} created category {}", admin.uid, id);
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id))))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = String, Path, description = "Category id")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found")
    ),
    tag = "admin-categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<CategoryViewModel>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()?;

    vm.update(&id, dto).await?;
    Ok(Json(ApiResponse::message("Category updated successfully")))
}

/// Delete a category
///
/// Products keep their `categoryId`; nothing cascades.
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = String, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<CategoryViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    vm.delete(&id).await?;
    Ok(Json(ApiResponse::message("Category deleted successfully")))
}
