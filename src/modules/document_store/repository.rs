use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use super::{Collection, DocumentStore, StoreError, RESERVED_FIELDS};

/// Uniform typed CRUD over any collection of the document store.
///
/// Store errors are returned unchanged; nothing here retries.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All documents of a collection tagged with their id.
    ///
    /// Documents that do not decode into `T` are skipped with a warning.
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, StoreError> {
        let documents = self.store.list(collection).await?;

        let mut items = Vec::with_capacity(documents.len());
        for document in documents {
            let id = document.id.clone();
            match serde_json::from_value::<T>(document.into_value()) {
                Ok(item) => items.push(item),
                Err(e) => {
                    tracing::warn!("Skipping undecodable document '{}/{}': {}", collection, id, e);
                }
            }
        }

        Ok(items)
    }

    /// A single document, or `None` when it does not exist
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let Some(document) = self.store.get(collection, id).await? else {
            return Ok(None);
        };

        serde_json::from_value::<T>(document.into_value())
            .map(Some)
            .map_err(|e| {
                StoreError::InvalidDocument(format!("'{}/{}': {}", collection, id, e))
            })
    }

    /// Store a new document and return its generated id
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        collection: Collection,
        data: &T,
    ) -> Result<String, StoreError> {
        let fields = to_fields(data)?;
        let id = self.store.insert(collection, fields).await?;
        tracing::debug!("Created document '{}/{}'", collection, id);
        Ok(id)
    }

    /// Merge the serialized fields of `partial` into an existing document
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        collection: Collection,
        id: &str,
        partial: &T,
    ) -> Result<(), StoreError> {
        let fields = to_fields(partial)?;
        self.store.merge_update(collection, id, fields).await?;
        tracing::debug!("Updated document '{}/{}'", collection, id);
        Ok(())
    }

    pub async fn remove(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        self.store.delete(collection, id).await?;
        tracing::debug!("Deleted document '{}/{}'", collection, id);
        Ok(())
    }
}

/// Serialize caller data into document fields, dropping store-owned keys
fn to_fields<T: Serialize + ?Sized>(data: &T) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(data) {
        Ok(Value::Object(mut fields)) => {
            for key in RESERVED_FIELDS {
                fields.remove(key);
            }
            Ok(fields)
        }
        Ok(other) => Err(StoreError::InvalidDocument(format!(
            "expected an object, got {}",
            other
        ))),
        Err(e) => Err(StoreError::InvalidDocument(e.to_string())),
    }
}
