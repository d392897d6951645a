//! Error types for the tracker and its persistence layer.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while reading or writing persisted tracker records.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to load document {}: {}", .0.display(), .1)]
    Load(PathBuf, String),

    #[error("Failed to update document {}: {}", .0.display(), .1)]
    Update(PathBuf, String),

    #[error("Corrupt record '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Failed to encode record '{key}': {reason}")]
    Encode { key: String, reason: String },
}

impl StorageError {
    pub(crate) fn corrupt(key: &str, reason: impl ToString) -> Self {
        StorageError::Corrupt {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors returned by tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Meal not found: {0}")]
    MealNotFound(Uuid),

    #[error("Workout not found: {0}")]
    WorkoutNotFound(Uuid),

    #[error("Invalid calorie value '{0}': expected a finite, non-negative number")]
    InvalidCalories(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_id() {
        let id = Uuid::new_v4();
        let err = TrackerError::MealNotFound(id);
        assert_eq!(err.to_string(), format!("Meal not found: {}", id));
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: TrackerError = StorageError::corrupt("meals", "expected value").into();
        assert_eq!(err.to_string(), "Corrupt record 'meals': expected value");
    }

    #[test]
    fn test_document_errors_name_the_failed_step() {
        let path = PathBuf::from("data/tracker.automerge");

        let load = StorageError::Load(path.clone(), "bad header".to_string());
        assert_eq!(
            load.to_string(),
            "Failed to load document data/tracker.automerge: bad header"
        );

        let update = StorageError::Update(path, "invalid op".to_string());
        assert_eq!(
            update.to_string(),
            "Failed to update document data/tracker.automerge: invalid op"
        );
    }
}
