use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Collection, Document, DocumentStore, StoreError};

/// Process-local document store.
///
/// Collections keep insertion order so that "store order" is deterministic.
/// Nothing is persisted; a restart starts empty.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document exactly as given, bypassing timestamp stamping.
    /// Used to model documents written by older clients.
    #[cfg(test)]
    pub async fn insert_raw(&self, collection: Collection, document: Document) {
        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().push(document);
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned()))
    }

    async fn insert(
        &self,
        collection: Collection,
        data: Map<String, Value>,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        let now = Utc::now();

        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().push(Document {
            id: id.clone(),
            data,
            created_at: Some(now),
            updated_at: Some(now),
        });

        Ok(id)
    }

    async fn merge_update(
        &self,
        collection: Collection,
        id: &str,
        data: Map<String, Value>,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        document.data.extend(data);

        // updatedAt must strictly advance even when the clock has not ticked
        let now = Utc::now();
        document.updated_at = Some(match document.updated_at {
            Some(previous) if previous >= now => previous + Duration::microseconds(1),
            _ => now,
        });

        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(&collection) {
            docs.retain(|d| d.id != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_insert_stamps_timestamps_and_lists_in_insertion_order() {
        let store = InMemoryDocumentStore::new();
        let first = store
            .insert(Collection::Clients, fields(json!({"name": "Acme"})))
            .await
            .unwrap();
        let second = store
            .insert(Collection::Clients, fields(json!({"name": "Globex"})))
            .await
            .unwrap();

        let docs = store.list(Collection::Clients).await.unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), second.as_str()]);
        assert!(docs[0].created_at.is_some());
        assert_eq!(docs[0].created_at, docs[0].updated_at);
    }

    #[tokio::test]
    async fn test_merge_update_missing_document_fails() {
        let store = InMemoryDocumentStore::new();
        let err = store
            .merge_update(Collection::Products, "missing", Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_merge_update_advances_updated_at() {
        let store = InMemoryDocumentStore::new();
        let id = store
            .insert(Collection::Products, fields(json!({"name": "Rice", "unit": "kg"})))
            .await
            .unwrap();
        let before = store.get(Collection::Products, &id).await.unwrap().unwrap();

        store
            .merge_update(Collection::Products, &id, fields(json!({"unit": "ton"})))
            .await
            .unwrap();

        let after = store.get(Collection::Products, &id).await.unwrap().unwrap();
        assert_eq!(after.data["name"], "Rice");
        assert_eq!(after.data["unit"], "ton");
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryDocumentStore::new();
        store.delete(Collection::Reviews, "nope").await.unwrap();

        let id = store
            .insert(Collection::Reviews, fields(json!({"rating": 5})))
            .await
            .unwrap();
        store.delete(Collection::Reviews, &id).await.unwrap();
        store.delete(Collection::Reviews, &id).await.unwrap();
        assert!(store.get(Collection::Reviews, &id).await.unwrap().is_none());
    }
}
