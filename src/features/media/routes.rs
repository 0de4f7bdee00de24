use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::features::media::handlers::{delete_media, upload_media};
use crate::features::media::services::MediaService;
use crate::shared::constants::MAX_MEDIA_SIZE;

/// Admin media routes, nested under `/api/admin`
pub fn admin_routes(service: Arc<MediaService>) -> Router {
    Router::new()
        .route(
            "/media",
            // Room for multipart overhead on top of the file itself
            post(upload_media)
                .delete(delete_media)
                .layer(DefaultBodyLimit::max(MAX_MEDIA_SIZE + 1024 * 1024)),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{with_admin_auth, MemoryObjectStorage};
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> (TestServer, Arc<MemoryObjectStorage>) {
        let storage = Arc::new(MemoryObjectStorage::default());
        let service = Arc::new(MediaService::new(storage.clone()));
        let server = TestServer::new(with_admin_auth(
            Router::new().nest("/api/admin", admin_routes(service)),
        ))
        .unwrap();
        (server, storage)
    }

    fn png_part() -> Part {
        Part::bytes(vec![0x89, b'P', b'N', b'G'])
            .file_name("logo.png")
            .mime_type("image/png")
    }

    #[tokio::test]
    async fn test_upload_and_delete() {
        let (server, storage) = server();

        let form = MultipartForm::new()
            .add_text("entity", "clients")
            .add_part("file", png_part());
        let response = server.post("/api/admin/media").multipart(form).await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let url = body["data"]["url"].as_str().unwrap().to_string();
        assert!(body["data"]["key"]
            .as_str()
            .unwrap()
            .starts_with("public/clients/"));
        assert_eq!(storage.objects.lock().unwrap().len(), 1);

        server
            .delete("/api/admin/media")
            .json(&json!({"url": url}))
            .await
            .assert_status_ok();
        assert!(storage.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_requires_known_entity() {
        let (server, _) = server();

        let form = MultipartForm::new()
            .add_text("entity", "users")
            .add_part("file", png_part());
        server
            .post("/api/admin/media")
            .multipart(form)
            .await
            .assert_status_bad_request();

        let form = MultipartForm::new().add_part("file", png_part());
        server
            .post("/api/admin/media")
            .multipart(form)
            .await
            .assert_status_bad_request();
    }
}
