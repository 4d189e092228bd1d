//! In-process storage backend, always available.

use dashmap::DashMap;

use crate::error::Result;
use crate::storage::StorageInterface;

/// Map-backed storage. Needs no capability probe and never fails; data is
/// lost when the instance is dropped.
#[derive(Clone, Debug, Default)]
pub struct MemStorage {
    table: DashMap<String, String>,
}

impl MemStorage {
    /// New MemStorage
    pub fn new() -> Self {
        Self {
            table: DashMap::default(),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the storage holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl StorageInterface for MemStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.table.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.table.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.table.remove(key);
        Ok(())
    }
}
