use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardViewModel;

/// Admin dashboard route, nested under `/api/admin`
pub fn admin_routes(vm: Arc<DashboardViewModel>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::get_summary))
        .with_state(vm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dashboard::services::DashboardService;
    use crate::modules::document_store::{Collection, Repository};
    use crate::shared::test_helpers::{
        memory_repository, test_query_client, with_admin_auth, FailingDocumentStore,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server(repository: Repository) -> TestServer {
        let vm = Arc::new(DashboardViewModel::new(
            Arc::new(DashboardService::new(repository)),
            test_query_client(),
        ));
        TestServer::new(with_admin_auth(
            Router::new().nest("/api/admin", admin_routes(vm)),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_summary() {
        let response = server(memory_repository()).get("/api/admin/dashboard").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["reviews"]["averageRating"], 0.0);
        assert_eq!(body["data"]["products"]["total"], 0);
        assert!(body["data"]["recentContacts"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_collection_is_503() {
        let repository = Repository::new(Arc::new(FailingDocumentStore::new(Collection::Clients)));
        let response = server(repository).get("/api/admin/dashboard").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
