//! Shared read cache for view models
//!
//! Reads are cached per [`QueryKey`]; concurrent readers of one key share a single
//! in-flight fetch, stale entries are served while one background refetch runs,
//! and writes invalidate every key of the entities they touch.

mod client;

pub use client::{Entity, QueryClient, QueryKey, QueryState};
