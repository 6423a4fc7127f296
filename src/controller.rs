// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interaction cycle: pick a location, fill the form, log the workout.
//!
//! The host forwards each UI event to one method here. Nothing blocks:
//! every method runs to completion and returns.

use crate::config::Config;
use crate::db::{KeyValueStore, WorkoutRepository};
use crate::error::{AppError, Result};
use crate::models::{Coords, Workout, WorkoutId, WorkoutKind};
use crate::services::{WorkoutFactory, WorkoutStore};
use crate::surfaces::{Notice, Surfaces};

/// Form state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    /// Form hidden, nothing picked.
    Idle,
    /// A location was picked and the form is open.
    LocationPending { coords: Coords },
}

/// Map state. The map only exists once the user's position is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapState {
    Unloaded,
    Loaded { center: Coords },
}

/// Drives the surfaces from UI events and owns the workout history.
pub struct AppController<S> {
    store: WorkoutStore<S>,
    factory: WorkoutFactory,
    surfaces: Surfaces,
    map_zoom: u8,
    form: FormState,
    map: MapState,
}

impl<S: KeyValueStore> AppController<S> {
    pub fn new(config: &Config, kv: S, factory: WorkoutFactory, surfaces: Surfaces) -> Self {
        let repo = WorkoutRepository::with_key(kv, config.storage_key.clone());
        Self {
            store: WorkoutStore::new(repo),
            factory,
            surfaces,
            map_zoom: config.map_zoom,
            form: FormState::Idle,
            map: MapState::Unloaded,
        }
    }

    /// Restore saved workouts, list them, then try to open the map.
    ///
    /// Without a position the map stays closed and the user is told why;
    /// the restored list is still shown.
    pub fn start(&mut self) -> Result<()> {
        if let Err(e) = self.store.restore() {
            tracing::warn!(error = %e, "Could not read saved workouts, starting empty");
        }

        for workout in self.store.all() {
            self.surfaces.list.render_item(workout);
        }

        let center = match self.surfaces.location.request_location() {
            Ok(center) => center,
            Err(e) => {
                tracing::warn!(reason = %e.reason, "Location unavailable");
                self.surfaces
                    .notifier
                    .notify(&Notice::LocationUnavailable(e.clone()));
                return Err(e.into());
            }
        };

        self.surfaces.map.load(center, self.map_zoom);
        self.map = MapState::Loaded { center };
        for workout in self.store.all() {
            self.surfaces
                .map
                .place_marker(workout.coords(), &workout.popup());
        }

        tracing::info!(
            center = %center,
            workouts = self.store.len(),
            "Application started"
        );
        Ok(())
    }

    /// The user clicked the map. Opens the form, or moves the pending
    /// location if it is already open.
    pub fn location_picked(&mut self, coords: Coords) {
        if self.map == MapState::Unloaded {
            tracing::debug!(coords = %coords, "Ignoring pick before the map is loaded");
            return;
        }
        self.form = FormState::LocationPending { coords };
        self.surfaces.form.show(coords);
    }

    pub fn type_changed(&mut self, kind: WorkoutKind) {
        self.surfaces.form.show_extra_field(kind);
    }

    /// The form was submitted.
    ///
    /// Invalid input keeps the form open with the pending location. A
    /// failed save is reported but the workout is still logged for this
    /// session.
    pub fn submit(&mut self) -> Result<WorkoutId> {
        let FormState::LocationPending { coords } = self.form else {
            tracing::debug!("Submit without a picked location");
            return Err(AppError::NoPendingLocation);
        };

        let input = self.surfaces.form.read_fields();
        let workout = match self.factory.create_from_input(&input, coords) {
            Ok(workout) => workout,
            Err(AppError::Validation(e)) => {
                self.surfaces
                    .notifier
                    .notify(&Notice::InvalidInput(e.clone()));
                return Err(e.into());
            }
            Err(e) => return Err(e),
        };
        let id = workout.id().clone();

        if let Err(e) = self.store.append(workout.clone()) {
            tracing::error!(id = %id, error = %e, "Failed to save workouts");
            self.surfaces
                .notifier
                .notify(&Notice::SaveFailed(e.to_string()));
        }

        self.surfaces
            .map
            .place_marker(workout.coords(), &workout.popup());
        self.surfaces.list.render_item(&workout);

        self.surfaces.form.hide();
        self.form = FormState::Idle;
        Ok(id)
    }

    /// The form was dismissed without submitting.
    pub fn cancel(&mut self) {
        if self.form != FormState::Idle {
            self.surfaces.form.hide();
            self.form = FormState::Idle;
        }
    }

    /// A list entry was clicked: pan the map to it.
    ///
    /// Unknown ids are ignored.
    pub fn item_activated(&mut self, id: &WorkoutId) -> Option<Coords> {
        let Some(workout) = self.store.record_activation(id) else {
            tracing::debug!(id = %id, "Activated workout not found");
            return None;
        };
        let coords = workout.coords();
        tracing::debug!(id = %id, uses = workout.usage_count(), "Workout activated");

        if let MapState::Loaded { .. } = self.map {
            self.surfaces.map.pan_to(coords, self.map_zoom);
        }
        Some(coords)
    }

    /// Delete the whole history, in memory and in storage.
    ///
    /// Already rendered list items and markers are left alone; the host
    /// reloads its page after a reset.
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset()?;
        tracing::info!("Workout history reset");
        Ok(())
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn map_state(&self) -> MapState {
        self.map
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.all()
    }

    pub fn find_workout(&self, id: &WorkoutId) -> Option<&Workout> {
        self.store.find_by_id(id)
    }
}
