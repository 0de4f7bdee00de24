use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactViewModel;

/// Public contact form route (no authentication required)
pub fn public_routes(vm: Arc<ContactViewModel>) -> Router {
    Router::new()
        .route("/api/contacts", post(handlers::submit_contact))
        .with_state(vm)
}

/// Admin contact routes, nested under `/api/admin`
pub fn admin_routes(vm: Arc<ContactViewModel>) -> Router {
    Router::new()
        .route("/contacts", get(handlers::list_contacts))
        .route(
            "/contacts/{id}",
            get(handlers::get_contact).delete(handlers::delete_contact),
        )
        .route("/contacts/{id}/read", put(handlers::mark_contact_read))
        .route("/contacts/{id}/reply", put(handlers::reply_to_contact))
        .with_state(vm)
}
