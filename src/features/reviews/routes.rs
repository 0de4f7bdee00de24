use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewViewModel;

/// Public review routes (no authentication required)
pub fn public_routes(vm: Arc<ReviewViewModel>) -> Router {
    Router::new()
        .route(
            "/api/reviews",
            get(handlers::list_approved_reviews).post(handlers::submit_review),
        )
        .with_state(vm)
}

/// Admin review routes, nested under `/api/admin`
pub fn admin_routes(vm: Arc<ReviewViewModel>) -> Router {
    Router::new()
        .route(
            "/reviews",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/reviews/{id}",
            get(handlers::get_review)
                .put(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .route("/reviews/{id}/status", put(handlers::set_review_status))
        .with_state(vm)
}
