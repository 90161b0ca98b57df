//! Store trait for record collections

use crate::core::entity::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Narrow interface over an ordered collection of records
///
/// Services receive a store instead of reaching for shared state, so each
/// test can run against a fresh one.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Append a new record
    async fn insert(&self, record: T) -> Result<T>;

    /// Find a record by exact id
    async fn find(&self, id: &str) -> Result<Option<T>>;

    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Overwrite the record carrying the same id, keeping its position
    async fn replace(&self, record: T) -> Result<T>;

    /// Remove a record by id, returning it if it existed
    async fn remove(&self, id: &str) -> Result<Option<T>>;
}
