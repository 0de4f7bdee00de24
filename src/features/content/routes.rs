use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::content::handlers;
use crate::features::content::services::ContentViewModel;

/// Public content routes (no authentication required)
pub fn public_routes(vm: Arc<ContentViewModel>) -> Router {
    Router::new()
        .route("/api/content/{key}", get(handlers::get_public_content))
        .route("/api/company", get(handlers::get_company_info))
        .with_state(vm)
}

/// Admin content routes, nested under `/api/admin`
pub fn admin_routes(vm: Arc<ContentViewModel>) -> Router {
    Router::new()
        .route("/content", get(handlers::list_content))
        .route(
            "/content/{key}",
            get(handlers::get_content).put(handlers::update_content),
        )
        .with_state(vm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::services::ContentService;
    use crate::shared::test_helpers::{memory_repository, test_query_client, with_admin_auth};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn servers() -> (TestServer, TestServer) {
        let vm = Arc::new(ContentViewModel::new(
            Arc::new(ContentService::new(memory_repository())),
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
    async fn test_content_upsert_is_visible_publicly() {
        let (public, admin) = servers();
        public
            .get("/api/content/about")
            .await
            .assert_status_not_found();

        admin
            .put("/api/admin/content/about")
            .json(&json!({"value": {"title": "Our story"}}))
            .await
            .assert_status_ok();

        let about: Value = public.get("/api/content/about").await.json();
        assert_eq!(about["data"]["key"], "about");
        assert_eq!(about["data"]["value"]["title"], "Our story");

        let listed: Value = admin.get("/api/admin/content").await.json();
        assert_eq!(listed["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_company_info_defaults_then_updates() {
        let (public, admin) = servers();
        let empty: Value = public.get("/api/company").await.json();
        assert_eq!(empty["data"]["name"], "");
        assert!(empty["data"].get("phone2").is_none());

        admin
            .put("/api/admin/content/companyInfo")
            .json(&json!({"value": {"name": "Mekong Agro", "phone2": "+84 90 000 0000"}}))
            .await
            .assert_status_ok();

        let info: Value = public.get("/api/company").await.json();
        assert_eq!(info["data"]["name"], "Mekong Agro");
        assert_eq!(info["data"]["phone2"], "+84 90 000 0000");
    }

    #[tokio::test]
    async fn test_invalid_company_info_rejected() {
        let (_, admin) = servers();
        admin
            .put("/api/admin/content/companyInfo")
            .json(&json!({"value": [1, 2, 3]}))
            .await
            .assert_status_bad_request();
    }
}
