// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout history persistence.
//!
//! The whole ordered history lives under one key as a JSON array and is
//! rewritten on every save.

use crate::db::kv::{KeyValueStore, StorageError};
use crate::db::keys;
use crate::models::Workout;

/// Saves and loads the workout history through a key-value store.
#[derive(Debug, Clone)]
pub struct WorkoutRepository<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutRepository<S> {
    /// Repository using the default `workouts` key.
    pub fn new(kv: S) -> Self {
        Self::with_key(kv, keys::WORKOUTS)
    }

    pub fn with_key(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored history with `records`, in order.
    pub fn save(&mut self, records: &[Workout]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(records)?;
        self.kv.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = records.len(), "Saved workouts");
        Ok(())
    }

    /// Load the stored history.
    ///
    /// A missing key is an empty history. So is a blob that does not
    /// parse: corrupt data is logged and dropped, never surfaced.
    pub fn load(&self) -> Result<Vec<Workout>, StorageError> {
        let Some(blob) = self.kv.get(&self.key)? else {
            tracing::debug!(key = %self.key, "No stored workouts");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Workout>>(&blob) {
            Ok(records) => {
                tracing::debug!(key = %self.key, count = records.len(), "Loaded workouts");
                Ok(records)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored workouts are corrupt, ignoring");
                Ok(Vec::new())
            }
        }
    }

    /// Delete the stored history.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.kv.remove(&self.key)?;
        tracing::info!(key = %self.key, "Cleared stored workouts");
        Ok(())
    }
}
