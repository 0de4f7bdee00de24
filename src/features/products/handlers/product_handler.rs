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
use crate::features::products::dtos::{
    CreateProductDto, ProductListQuery, ProductQuery, UpdateProductDto,
};
use crate::features::products::models::Product;
use crate::features::products::services::ProductViewModel;
use crate::shared::types::{ApiResponse, CreatedDto, Meta};

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}

fn list_response(products: Arc<Vec<Product>>) -> Json<ApiResponse<Vec<Product>>> {
    let total = products.len();
    Json(ApiResponse::success(
        Some(products.as_ref().clone()),
        None,
        Some(Meta::total(total)),
    ))
}

/// List active products, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Active products", body = ApiResponse<Vec<Product>>),
    ),
    tag = "products"
)]
pub async fn list_active_products(
    State(vm): State<Arc<ProductViewModel>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = vm.products(true, query.category_id).await?;
    Ok(list_response(products))
}

/// List featured products
#[utoipa::path(
    get,
    path = "/api/products/featured",
    responses(
        (status = 200, description = "Up to six featured products", body = ApiResponse<Vec<Product>>),
    ),
    tag = "products"
)]
pub async fn list_featured_products(
    State(vm): State<Arc<ProductViewModel>>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = vm.featured_products().await?;
    Ok(list_response(products))
}

/// Get an active product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_public_product(
    State(vm): State<Arc<ProductViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>> {
    let product = vm
        .product(&id)
        .await?
        .as_ref()
        .clone()
        .filter(|p| p.is_active)
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Get an active product by slug
#[utoipa::path(
    get,
    path = "/api/products/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product_by_slug(
    State(vm): State<Arc<ProductViewModel>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Product>>> {
    let product = vm
        .product_by_slug(&slug)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", slug)))?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// List all products (admin)
#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products, newest first", body = ApiResponse<Vec<Product>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_products(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ProductViewModel>>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = vm.products(query.active_only, query.category_id).await?;
    Ok(list_response(products))
}

/// Get any product by id (admin)
#[utoipa::path(
    get,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_product(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ProductViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>> {
    let product = vm
        .product(&id)
        .await?
        .as_ref()
        .clone()
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<CreatedDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    admin: AuthenticatedAdmin,
    State(vm): State<Arc<ProductViewModel>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>)> {
    dto.validate()?;

    let id = vm.create(dto).await?;
    tracing::info!("Admin {} created product {}", admin.uid, id);
    Ok((StatusCode::CREATED, Json(ApiResponse::created(id))))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ProductViewModel>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()?;

    vm.update(&id, dto).await?;
    Ok(Json(ApiResponse::message("Product updated successfully")))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin-products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    _admin: AuthenticatedAdmin,
    State(vm): State<Arc<ProductViewModel>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    vm.delete(&id).await?;
    Ok(Json(ApiResponse::message("Product deleted successfully")))
}
