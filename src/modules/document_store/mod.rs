//! Document store boundary
//!
//! Named collections of id-keyed, schemaless JSON documents. The store assigns
//! ids and `createdAt`/`updatedAt` timestamps; everything else is caller data.
//!
//! Implementations:
//! - [`PgDocumentStore`]: PostgreSQL table with a JSONB body
//! - [`InMemoryDocumentStore`]: process-local, used for tests and `memory://`

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

mod memory;
mod postgres;
mod repository;

pub use memory::InMemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use repository::Repository;

/// Field names owned by the store, never taken from caller data
pub const RESERVED_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Collections known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Categories,
    Products,
    Reviews,
    Contacts,
    Content,
    Clients,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Categories => "categories",
            Collection::Products => "products",
            Collection::Reviews => "reviews",
            Collection::Contacts => "contacts",
            Collection::Content => "content",
            Collection::Clients => "clients",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document with its store-managed metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Flatten into a single JSON object tagged with `id` and the store timestamps.
    ///
    /// Timestamps already present in `data` (imported documents) are kept when
    /// the store has none of its own.
    pub fn into_value(self) -> Value {
        let mut fields = self.data;
        fields.insert("id".to_string(), Value::String(self.id));
        if let Some(created_at) = self.created_at {
            fields.insert(
                "createdAt".to_string(),
                Value::String(created_at.to_rfc3339()),
            );
        }
        if let Some(updated_at) = self.updated_at {
            fields.insert(
                "updatedAt".to_string(),
                Value::String(updated_at.to_rfc3339()),
            );
        }
        Value::Object(fields)
    }
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Document '{id}' not found in '{collection}'")]
    NotFound { collection: String, id: String },

    /// The store refused the query as issued (e.g. a required index is missing)
    #[error("Precondition failed: {0}")]
    FailedPrecondition(String),

    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Document store error: {0}")]
    Backend(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Raw operations consumed by the catalog. Every call is a round trip to the store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, in store order
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    async fn get(&self, collection: Collection, id: &str)
        -> Result<Option<Document>, StoreError>;

    /// Add a document under a generated id, stamping both timestamps
    async fn insert(
        &self,
        collection: Collection,
        data: Map<String, Value>,
    ) -> Result<String, StoreError>;

    /// Merge fields into an existing document and refresh `updatedAt`.
    /// Fails with [`StoreError::NotFound`] when the id does not exist.
    async fn merge_update(
        &self,
        collection: Collection,
        id: &str,
        data: Map<String, Value>,
    ) -> Result<(), StoreError>;

    /// Hard delete; deleting a missing id is not an error
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;
}
