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
use crate::features::contacts::dtos::{ContactListQuery, CreateContactDto, ReplyContactDto};
use crate::features::contacts::models::ContactSubmission;
use crate::features::contacts::services::ContactViewModel;
use crate::shared::types::{ApiResponse, CreatedDto, Meta};

/// Submit a contact or quote request
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Submission received", body = ApiResponse<CreatedDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contacts"
)]
pub async fn submit_contact(
    State(vm): State<Arc<ContactViewModel>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>)> {
    dto.validate()?;

    let id = vm.submit(dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id))))
}

/// List contact submissions
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    params(ContactListQuery),
    responses(
        (status = 200, description = "Submissions, newest first", body = ApiResponse<Vec<ContactSubmission>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-contacts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_contacts(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContactViewModel>>,
    Query(query): Query<ContactListQuery>,
) -> Result<Json<ApiResponse<Vec<ContactSubmission>>>> {
    let contacts = vm.contacts(query.unread_only).await?;
    let total = contacts.len();
    Ok(Json(ApiResponse::success(
        Some(contacts.as_ref().clone()),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get a contact submission
#[utoipa::path(
    get,
    path = "/api/admin/contacts/{id}",
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Submission found", body = ApiResponse<ContactSubmission>),
        (status = 404, description = "Submission not found")
    ),
    tag = "admin-contacts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_contact(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContactViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ContactSubmission>>> {
    let contact = vm
        .contact(&id)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| AppError::NotFound(format!("Contact submission {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(contact), None, None)))
}

/// Mark a submission as read
#[utoipa::path(
    put,
    path = "/api/admin/contacts/{id}/read",
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Marked as read"),
        (status = 404, description = "Submission not found")
    ),
    tag = "admin-contacts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn mark_contact_read(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContactViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    vm.mark_read(&id).await?;
    Ok(Json(ApiResponse::message("Marked as read")))
}

/// Record a reply to a submission
#[utoipa::path(
    put,
    path = "/api/admin/contacts/{id}/reply",
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    request_body = ReplyContactDto,
    responses(
        (status = 200, description = "Reply recorded"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Submission not found")
    ),
    tag = "admin-contacts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn reply_to_contact(
    admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContactViewModel>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<ReplyContactDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()?;

    vm.reply(&id, &dto.note).await?;
    tracing::info!("Admin {} replied to contact {}", admin.uid, id);
    Ok(Json(ApiResponse::message("Reply recorded")))
}

/// Delete a submission
#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "Submission deleted"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-contacts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_contact(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ContactViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    vm.delete(&id).await?;
    Ok(Json(ApiResponse::message("Contact submission deleted successfully")))
}
