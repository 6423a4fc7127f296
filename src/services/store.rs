// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory workout history backed by a [`WorkoutRepository`].

use crate::db::{KeyValueStore, StorageError, WorkoutRepository};
use crate::models::{Workout, WorkoutId};

/// Ordered workout history.
///
/// Insertion order is display order. Records are only ever appended;
/// the one way to drop them is [`WorkoutStore::reset`].
pub struct WorkoutStore<S> {
    records: Vec<Workout>,
    repo: WorkoutRepository<S>,
}

impl<S: KeyValueStore> WorkoutStore<S> {
    /// Empty store; call [`restore`](Self::restore) to load saved history.
    pub fn new(repo: WorkoutRepository<S>) -> Self {
        Self {
            records: Vec::new(),
            repo,
        }
    }

    /// Append a validated record and save the whole history.
    ///
    /// The record stays in memory even if the save fails.
    pub fn append(&mut self, record: Workout) -> Result<(), StorageError> {
        tracing::debug!(id = %record.id(), position = self.records.len(), "Appending workout");
        self.records.push(record);
        self.repo.save(&self.records)
    }

    /// All records, oldest first.
    pub fn all(&self) -> &[Workout] {
        &self.records
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.records.iter().find(|w| w.id() == id)
    }

    /// Bump the usage counter of a record, returning it.
    pub fn record_activation(&mut self, id: &WorkoutId) -> Option<&Workout> {
        let workout = self.records.iter_mut().find(|w| w.id() == id)?;
        workout.mark_used();
        Some(&*workout)
    }

    /// Replace the in-memory history with what is saved.
    ///
    /// Stored derived metrics are trusted, not recomputed.
    pub fn restore(&mut self) -> Result<usize, StorageError> {
        self.records = self.repo.load()?;
        tracing::info!(count = self.records.len(), "Restored workouts");
        Ok(self.records.len())
    }

    /// Forget every record, in storage and then in memory.
    ///
    /// If the storage delete fails nothing is forgotten.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.repo.clear()?;
        self.records.clear();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
