use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::clients::handlers;
use crate::features::clients::services::ClientViewModel;

/// Public client routes (no authentication required)
pub fn public_routes(vm: Arc<ClientViewModel>) -> Router {
    Router::new()
        .route("/api/clients", get(handlers::list_active_clients))
        .with_state(vm)
}

/// Admin client routes, nested under `/api/admin`
pub fn admin_routes(vm: Arc<ClientViewModel>) -> Router {
    Router::new()
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/clients/{id}",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .with_state(vm)
}
