//! String key-value stores backing tracker persistence.
//!
//! The tracker never talks to a concrete backend directly; it goes through
//! [`KeyValueStore`], so tests can swap in [`MemoryStore`] while the CLI
//! uses the on-disk [`DocumentStore`].

mod document;
mod memory;

pub use document::{DocumentStore, STORE_FILENAME};
pub use memory::MemoryStore;

use crate::error::StorageError;

/// One write in a batch passed to [`KeyValueStore::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change<'a> {
    Set(&'a str, &'a str),
    Remove(&'a str),
}

impl<'a> Change<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            Change::Set(key, _) | Change::Remove(key) => key,
        }
    }
}

/// A durable store of string values addressed by string keys.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if it has never been set or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Applies every change in `changes`, or none of them.
    ///
    /// On error the store must be left exactly as it was before the call,
    /// both in memory and on disk.
    fn apply(&mut self, changes: &[Change<'_>]) -> Result<(), StorageError>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.apply(&[Change::Set(key, value)])
    }

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.apply(&[Change::Remove(key)])
    }
}
