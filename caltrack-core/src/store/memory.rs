use std::collections::BTreeMap;

use super::{Change, KeyValueStore};
use crate::error::StorageError;

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn apply(&mut self, changes: &[Change<'_>]) -> Result<(), StorageError> {
        for change in changes {
            match *change {
                Change::Set(key, value) => {
                    self.entries.insert(key.to_string(), value.to_string());
                }
                Change::Remove(key) => {
                    self.entries.remove(key);
                }
            }
        }
        Ok(())
    }
}
