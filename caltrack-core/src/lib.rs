//! caltrack Core Library
//!
//! Calorie models, key-value persistence and the running tracker shared by
//! caltrack front ends.

pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod summary;
pub mod tracker;
pub mod view;

pub use error::{Result, StorageError, TrackerError};
pub use models::{Calories, Meal, Workout};
pub use storage::TrackerStorage;
pub use store::{Change, DocumentStore, KeyValueStore, MemoryStore};
pub use summary::Summary;
pub use tracker::Tracker;
pub use view::{NullView, TrackerView};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
