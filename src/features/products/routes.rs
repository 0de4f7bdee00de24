use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductViewModel;

/// Public product routes (no authentication required)
pub fn public_routes(vm: Arc<ProductViewModel>) -> Router {
    Router::new()
        .route("/api/products", get(handlers::list_active_products))
        .route("/api/products/featured", get(handlers::list_featured_products))
        .route("/api/products/{id}", get(handlers::get_public_product))
        .route("/api/products/slug/{slug}", get(handlers::get_product_by_slug))
        .with_state(vm)
}

/// Admin product routes, nested under `/api/admin`
pub fn admin_routes(vm: Arc<ProductViewModel>) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(vm)
}
