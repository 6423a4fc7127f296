//! Storage layer (key-value store + workout history).

pub mod kv;
pub mod persistence;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use persistence::WorkoutRepository;

/// Storage key names as constants.
pub mod keys {
    /// Full workout history (JSON array)
    pub const WORKOUTS: &str = "workouts";
}
