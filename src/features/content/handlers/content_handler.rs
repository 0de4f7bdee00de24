use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::content::dtos::UpdateContentDto;
use crate::features::content::models::{CompanyInfo, SiteContent};
use crate::features::content::services::ContentViewModel;
use crate::shared::types::{ApiResponse, Meta};

async fn find_content(vm: &ContentViewModel, key: &str) -> Result<SiteContent> {
    vm.content(key)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| AppError::NotFound(format!("Content '{}' not found", key)))
}

/// Get site content by key
#[utoipa::path(
    get,
    path = "/api/content/{key}",
    params(
        ("key" = String, Path, description = "Content key, e.g. heroSlides")
    ),
    responses(
        (status = 200, description = "Content found", body = ApiResponse<SiteContent>),
        (status = 404, description = "No content under this key")
    ),
    tag = "content"
)]
pub async fn get_public_content(
    State(vm): State<Arc<ContentViewModel>>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<SiteContent>>> {
    let content = find_content(&vm, &key).await?;
    Ok(Json(ApiResponse::success(Some(content), None, None)))
}

/// Get the company profile
///
/// Always succeeds; fields missing from the stored profile are empty or absent.
#[utoipa::path(
    get,
    path = "/api/company",
    responses(
        (status = 200, description = "Company profile", body = ApiResponse<CompanyInfo>),
    ),
    tag = "content"
)]
pub async fn get_company_info(
    State(vm): State<Arc<ContentViewModel>>,
) -> Result<Json<ApiResponse<CompanyInfo>>> {
    let info = vm.company_info().await?;
    Ok(Json(ApiResponse::success(
        Some(info.as_ref().clone()),
        None,
        None,
    )))
}

/// List all content documents
#[utoipa::path(
    get,
    path = "/api/admin/content",
    responses(
        (status = 200, description = "Content by key", body = ApiResponse<Vec<SiteContent>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-content",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_content(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContentViewModel>>,
) -> Result<Json<ApiResponse<Vec<SiteContent>>>> {
    let content = vm.all_content().await?;
    let total = content.len();
    Ok(Json(ApiResponse::success(
        Some(content.as_ref().clone()),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get content by key (admin)
#[utoipa::path(
    get,
    path = "/api/admin/content/{key}",
    params(
        ("key" = String, Path, description = "Content key")
    ),
    responses(
        (status = 200, description = "Content found", body = ApiResponse<SiteContent>),
        (status = 404, description = "No content under this key")
    ),
    tag = "admin-content",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_content(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContentViewModel>>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<SiteContent>>> {
    let content = find_content(&vm, &key).await?;
    Ok(Json(ApiResponse::success(Some(content), None, None)))
}

/// Create or replace the content stored under a key
#[utoipa::path(
    put,
    path = "/api/admin/content/{key}",
    params(
        ("key" = String, Path, description = "Content key")
    ),
    request_body = UpdateContentDto,
    responses(
        (status = 200, description = "Content stored"),
        (status = 400, description = "Invalid key or value"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-content",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_content(
    admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContentViewModel>>,
    Path(key): Path<String>,
    AppJson(dto): AppJson<UpdateContentDto>,
) -> Result<Json<ApiResponse<()>>> {
    vm.update(&key, dto.value).await?;
    tracing::info!("Admin {} updated content '{}'", admin.uid, key);
    Ok(Json(ApiResponse::message("Content updated successfully")))
}
