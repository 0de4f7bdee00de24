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
use crate::features::clients::dtos::{ClientListQuery, CreateClientDto, UpdateClientDto};
use crate::features::clients::models::Client;
use crate::features::clients::services::ClientViewModel;
use crate::shared::types::{ApiResponse, CreatedDto, Meta};

fn list_response(clients: Arc<Vec<Client>>) -> Json<ApiResponse<Vec<Client>>> {
    let total = clients.len();
    Json(ApiResponse::success(
        Some(clients.as_ref().clone()),
        None,
        Some(Meta::total(total)),
    ))
}

/// List active clients by display order
#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "Active clients", body = ApiResponse<Vec<Client>>),
    ),
    tag = "clients"
)]
pub async fn list_active_clients(
    State(vm): State<Arc<ClientViewModel>>,
) -> Result<Json<ApiResponse<Vec<Client>>>> {
    let clients = vm.clients(true).await?;
    Ok(list_response(clients))
}

/// List all clients (admin)
#[utoipa::path(
    get,
    path = "/api/admin/clients",
    params(ClientListQuery),
    responses(
        (status = 200, description = "Clients by display order", body = ApiResponse<Vec<Client>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-clients",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_clients(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ClientViewModel>>,
    Query(query): Query<ClientListQuery>,
) -> Result<Json<ApiResponse<Vec<Client>>>> {
    let clients = vm.clients(query.active_only).await?;
    Ok(list_response(clients))
}

/// Get a client (admin)
#[utoipa::path(
    get,
    path = "/api/admin/clients/{id}",
    params(
        ("id" = String, Path, description = "Client id")
    ),
    responses(
        (status = 200, description = "Client found", body = ApiResponse<Client>),
        (status = 404, description = "Client not found")
    ),
    tag = "admin-clients",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_client(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ClientViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Client>>> {
    let client = vm
        .client(&id)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(client), None, None)))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/api/admin/clients",
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Client created", body = ApiResponse<CreatedDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-clients",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_client(
    admin: AuthenticatedAdmin,
    State(vm): State<Arc<ClientViewModel>>,
    AppJson(dto): AppJson<CreateClientDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>)> {
    dto.validate()?;

    let id = vm.create(dto).await?;
    tracing::info!("Admin {} created client {}", admin.uid, id);
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id))))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/api/admin/clients/{id}",
    params(
        ("id" = String, Path, description = "Client id")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Client updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Client not found")
    ),
    tag = "admin-clients",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_client(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ClientViewModel>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateClientDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()?;

    vm.update(&id, dto).await?;
    Ok(Json(ApiResponse::message("Client updated successfully")))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/api/admin/clients/{id}",
    params(
        ("id" = String, Path, description = "Client id")
    ),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-clients",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_client(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ClientViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    vm.delete(&id).await?;
    Ok(Json(ApiResponse::message("Client deleted successfully")))
}
