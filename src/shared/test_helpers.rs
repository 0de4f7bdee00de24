#[cfg(test)]
use crate::features::auth::model::{AdminRole, AuthenticatedAdmin};

#[cfg(test)]
use crate::modules::document_store::{
    Collection, Document, DocumentStore, InMemoryDocumentStore, Repository, StoreError,
};

#[cfg(test)]
use crate::core::error::AppError;

#[cfg(test)]
use crate::modules::query_cache::QueryClient;

#[cfg(test)]
use crate::modules::storage::ObjectStorage;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use serde_json::{Map, Value};

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
pub fn create_admin() -> AuthenticatedAdmin {
    AuthenticatedAdmin {
        uid: "test-admin-uid".to_string(),
        email: Some("admin@example.com".to_string()),
        name: Some("Test Admin".to_string()),
        role: AdminRole::Admin,
    }
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin());
    next.run(request).await
}

/// Wrap a router so every request carries an authenticated admin
#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}

/// Repository over a fresh in-memory store
#[cfg(test)]
pub fn memory_repository() -> Repository {
    Repository::new(Arc::new(InMemoryDocumentStore::new()))
}

/// Query client whose entries stay fresh for the duration of a test
#[cfg(test)]
pub fn test_query_client() -> QueryClient {
    QueryClient::new(Duration::from_secs(60))
}

/// Store that fails every call on one collection and delegates the rest
#[cfg(test)]
pub struct FailingDocumentStore {
    inner: InMemoryDocumentStore,
    failing: Collection,
}

#[cfg(test)]
impl FailingDocumentStore {
    pub fn new(failing: Collection) -> Self {
        Self {
            inner: InMemoryDocumentStore::new(),
            failing,
        }
    }

    fn check(&self, collection: Collection) -> Result<(), StoreError> {
        if collection == self.failing {
            return Err(StoreError::Unavailable(format!(
                "collection '{}' is offline",
                collection
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        self.check(collection)?;
        self.inner.list(collection).await
    }

    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.check(collection)?;
        self.inner.get(collection, id).await
    }

    async fn insert(
        &self,
        collection: Collection,
        data: Map<String, Value>,
    ) -> Result<String, StoreError> {
        self.check(collection)?;
        self.inner.insert(collection, data).await
    }

    async fn merge_update(
        &self,
        collection: Collection,
        id: &str,
        data: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.check(collection)?;
        self.inner.merge_update(collection, id, data).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        self.check(collection)?;
        self.inner.delete(collection, id).await
    }
}

/// Base URL of objects stored in [`MemoryObjectStorage`]
#[cfg(test)]
pub const MEMORY_STORAGE_URL: &str = "http://storage.test/media";

/// Object storage kept in a map
#[cfg(test)]
#[derive(Default)]
pub struct MemoryObjectStorage {
    pub objects: std::sync::Mutex<std::collections::HashMap<String, (Vec<u8>, String)>>,
}

#[cfg(test)]
#[async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (data, content_type.to_string()));
        Ok(format!("{}/{}", MEMORY_STORAGE_URL, key))
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&format!("{}/", MEMORY_STORAGE_URL))
            .map(str::to_string)
    }

    fn public_prefix(&self) -> &str {
        "public"
    }
}
