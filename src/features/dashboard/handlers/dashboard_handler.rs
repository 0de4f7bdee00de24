use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardViewModel;
use crate::shared::types::ApiResponse;

/// Get the back-office dashboard summary
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "admin-dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 503, description = "A collection could not be read")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_summary(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<DashboardViewModel>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>, AppError> {
    let summary = vm.summary().await?;
    Ok(Json(ApiResponse::success(
        Some(summary.as_ref().clone()),
        None,
        None,
    )))
}
