//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the document store boundary, the shared query cache and the
//! object storage client.

pub mod document_store;
pub mod query_cache;
pub mod storage;
