//! In-memory storage
//!
//! Backs the session scope: its contents live exactly as long as the running
//! client. Also serves as the durable-scope fake in tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::{StorageError, StorageProvider};

#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?
            .remove(key);
        Ok(())
    }
}
