use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryViewModel;

/// Public category routes (no authentication required)
pub fn public_routes(vm: Arc<CategoryViewModel>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_active_categories))
        .route("/api/categories/{id}", get(handlers::get_public_category))
        .route(
            "/api/categories/slug/{slug}",
            get(handlers::get_category_by_slug),
        )
        .with_state(vm)
}

/// Admin category routes, nested under `/api/admin`
pub fn admin_routes(vm: Arc<CategoryViewModel>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(vm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::services::CategoryService;
    use crate::shared::test_helpers::{memory_repository, test_query_client, with_admin_auth};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn servers() -> (TestServer, TestServer) {
        let vm = Arc::new(CategoryViewModel::new(
            Arc::new(CategoryService::new(memory_repository())),
            test_query_client(),
        ));
        let public = TestServer::new(public_routes(vm.clone())).unwrap();
        let admin = TestServer::new(with_admin_auth(
            Router::new().nest("/api/admin", admin_routes(vm)),
        ))
        .unwrap();
        (public, admin)
    }

    #[tokio::test]
    async fn test_rice_and_equipment_listed_by_order() {
        let (public, admin) = servers();

        let created = admin
            .post("/api/admin/categories")
            .json(&json!({"name": "Rice", "order": 2}))
            .await;
        created.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = created.json();
        assert!(body["data"]["id"].is_string());

        admin
            .post("/api/admin/categories")
            .json(&json!({"name": "Equipment", "order": 1}))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let list: Value = public.get("/api/categories").await.json();
        assert_eq!(list["meta"]["total"], 2);
        assert_eq!(list["data"][0]["name"], "Equipment");
        assert_eq!(list["data"][1]["name"], "Rice");
    }

    #[tokio::test]
    async fn test_inactive_category_hidden_from_public() {
        let (public, admin) = servers();
        let body: Value = admin
            .post("/api/admin/categories")
            .json(&json!({"name": "Archived", "isActive": false}))
            .await
            .json();
        let id = body["data"]["id"].as_str().unwrap().to_string();

        public
            .get(&format!("/api/categories/{}", id))
            .await
            .assert_status_not_found();
        public
            .get("/api/categories/slug/archived")
            .await
            .assert_status_not_found();

        let all: Value = admin.get("/api/admin/categories").await.json();
        assert_eq!(all["data"].as_array().unwrap().len(), 1);
        let active: Value = admin
            .get("/api/admin/categories")
            .add_query_param("activeOnly", true)
            .await
            .json();
        assert!(active["data"].as_array().unwrap().is_empty());

        admin
            .get(&format!("/api/admin/categories/{}", id))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (public, admin) = servers();
        let body: Value = admin
            .post("/api/admin/categories")
            .json(&json!({"name": "Rice"}))
            .await
            .json();
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let updated = admin
            .put(&format!("/api/admin/categories/{}", id))
            .json(&json!({"name": "Premium Rice"}))
            .await;
        updated.assert_status_ok();

        let fetched: Value = public.get(&format!("/api/categories/{}", id)).await.json();
        assert_eq!(fetched["data"]["name"], "Premium Rice");
        assert_eq!(fetched["data"]["slug"], "rice");

        admin
            .delete(&format!("/api/admin/categories/{}", id))
            .await
            .assert_status_ok();
        public
            .get(&format!("/api/categories/{}", id))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected() {
        let (_, admin) = servers();
        admin
            .post("/api/admin/categories")
            .json(&json!({"name": "R"}))
            .await
            .assert_status_bad_request();
        admin
            .post("/api/admin/categories")
            .json(&json!({"name": "Rice", "slug": "Not A Slug"}))
            .await
            .assert_status_bad_request();
        admin
            .put("/api/admin/categories/missing")
            .json(&json!({"name": "Rice"}))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_admin_routes_require_admin() {
        let vm = Arc::new(CategoryViewModel::new(
            Arc::new(CategoryService::new(memory_repository())),
            test_query_client(),
        ));
        let server = TestServer::new(Router::new().nest("/api/admin", admin_routes(vm))).unwrap();
        server
            .get("/api/admin/categories")
            .await
            .assert_status_unauthorized();
    }
}
