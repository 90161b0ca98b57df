//! In-memory implementation of RecordStore

use crate::core::{Record, RecordStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory record store
///
/// Keeps records in insertion order. Uses RwLock for thread-safe access;
/// contents do not survive a restart.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with records (seed data)
    ///
    /// Fails if two records share an id.
    pub fn with_records(records: Vec<T>) -> Result<Self> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id() == record.id()) {
                return Err(anyhow!("Duplicate {} id: {}", T::KIND, record.id()));
            }
        }

        Ok(Self {
            records: Arc::new(RwLock::new(records)),
        })
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn insert(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(anyhow!("{} with id '{}' already exists", T::KIND, record.id()));
        }

        records.push(record.clone());

        Ok(record)
    }

    async fn find(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn replace(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| anyhow!("{} not found: {}", T::KIND, record.id()))?;

        *slot = record.clone();

        Ok(record)
    }

    async fn remove(&self, id: &str) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let index = records.iter().position(|r| r.id() == id);

        Ok(index.map(|index| records.remove(index)))
    }
}
