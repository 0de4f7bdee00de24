use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedAdmin;
use crate::features::media::dtos::{DeleteMediaDto, MediaEntity, MediaResponseDto, UploadMediaDto};
use crate::features::media::services::MediaService;
use crate::shared::types::ApiResponse;

/// Upload an image or video
///
/// Accepts multipart/form-data with:
/// - `file`: the file to upload (required)
/// - `entity`: owning entity type, one of categories, products, reviews, clients, content (required)
#[utoipa::path(
    post,
    path = "/api/admin/media",
    tag = "admin-media",
    request_body(
        content = UploadMediaDto,
        content_type = "multipart/form-data",
        description = "Media file and the entity type it belongs to",
    ),
    responses(
        (status = 201, description = "Media uploaded", body = ApiResponse<MediaResponseDto>),
        (status = 400, description = "Missing field, unknown entity, disallowed type or file too large"),
        (status = 401, description = "Unauthorized"),
        (status = 413, description = "Request body too large")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_media(
    admin: AuthenticatedAdmin,
    State(service): State<Arc<MediaService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<MediaResponseDto>>), AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut entity: Option<MediaEntity> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file = Some((file_name, content_type, data.to_vec()));
            }
            "entity" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read entity field: {}", e))
                })?;
                entity = Some(MediaEntity::parse(&text).ok_or_else(|| {
                    AppError::BadRequest(format!("Unknown entity type '{}'", text))
                })?);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let entity =
        entity.ok_or_else(|| AppError::BadRequest("Entity type is required".to_string()))?;

    let media = service
        .upload(entity, &file_name, &content_type, data)
        .await?;
    tracing::info!("Admin {} uploaded {}", admin.uid, media.key);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(media), None, None)),
    ))
}

/// Delete a media file by its URL
#[utoipa::path(
    delete,
    path = "/api/admin/media",
    tag = "admin-media",
    request_body = DeleteMediaDto,
    responses(
        (status = 200, description = "Media deleted"),
        (status = 400, description = "URL is not an uploaded media file"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_media(
    _admin: AuthenticatedAdmin,
    State(service): State<Arc<MediaService>>,
    AppJson(dto): AppJson<DeleteMediaDto>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    dto.validate()?;

    service.delete_by_url(&dto.url).await?;
    Ok(Json(ApiResponse::message("Media deleted successfully")))
}
