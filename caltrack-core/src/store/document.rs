//! Automerge-backed store persisted to a single file.
//!
//! Records live as string values in the root map of one Automerge document
//! at `<data_dir>/tracker.automerge`. Every write saves the whole document,
//! and a batch of writes is saved once.

use automerge::{transaction::Transactable, AutoCommit, AutomergeError, ReadDoc, ROOT};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Change, KeyValueStore};
use crate::error::StorageError;

/// Filename of the tracker document inside the data directory.
pub const STORE_FILENAME: &str = "tracker.automerge";

/// On-disk key-value store.
pub struct DocumentStore {
    data_dir: PathBuf,
    path: PathBuf,
    doc: AutoCommit,
}

impl DocumentStore {
    /// Opens the store in `data_dir`.
    ///
    /// A missing document starts out empty; the file and directory are only
    /// created on the first write.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        let path = data_dir.join(STORE_FILENAME);

        let doc = match fs::read(&path) {
            Ok(bytes) => AutoCommit::load(&bytes)
                .map_err(|e| StorageError::Load(path.clone(), e.to_string()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => AutoCommit::new(),
            Err(e) => return Err(StorageError::Io(path, e)),
        };

        tracing::info!("Opened store {}", path.display());

        Ok(Self {
            data_dir,
            path,
            doc,
        })
    }

    /// Returns the path of the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks if the document has been written to disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes `doc` to the document file.
    fn save(&self, doc: &mut AutoCommit) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        let bytes = doc.save();
        fs::write(&self.path, &bytes).map_err(|e| StorageError::Io(self.path.clone(), e))?;

        tracing::debug!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    fn load_error(&self, e: AutomergeError) -> StorageError {
        StorageError::Load(self.path.clone(), e.to_string())
    }

    fn update_error(&self, e: AutomergeError) -> StorageError {
        StorageError::Update(self.path.clone(), e.to_string())
    }
}

impl KeyValueStore for DocumentStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.doc.get(ROOT, key).map_err(|e| self.load_error(e))? {
            Some((value, _)) => value
                .into_string()
                .map(Some)
                .map_err(|_| StorageError::corrupt(key, "stored value is not text")),
            None => Ok(None),
        }
    }

    /// Applies the batch to a fork of the document and saves it once.
    ///
    /// The fork replaces the live document only after the save succeeded, so
    /// a failed write never reaches a later save.
    fn apply(&mut self, changes: &[Change<'_>]) -> Result<(), StorageError> {
        let mut staged = self.doc.fork();
        let mut changed = false;

        for change in changes {
            match *change {
                Change::Set(key, value) => {
                    staged
                        .put(ROOT, key, value)
                        .map_err(|e| self.update_error(e))?;
                    changed = true;
                }
                Change::Remove(key) => {
                    let present = staged
                        .get(ROOT, key)
                        .map_err(|e| self.load_error(e))?
                        .is_some();
                    if present {
                        staged.delete(ROOT, key).map_err(|e| self.update_error(e))?;
                        changed = true;
                    }
                }
            }
        }

        if !changed {
            return Ok(());
        }

        self.save(&mut staged)?;
        self.doc = staged;
        Ok(())
    }
}
