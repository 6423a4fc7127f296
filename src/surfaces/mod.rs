// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interfaces to the outside world: position, map, form, list, alerts.
//!
//! The controller only talks to these traits. A browser host implements
//! them over the DOM and the map library; [`headless`] has simple
//! logging versions for the native binary.

pub mod headless;

use crate::models::{Coords, MarkerPopup, RawWorkoutInput, Workout, WorkoutKind};
use crate::services::ValidationError;

/// The position provider could not produce a location.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Could not get your position: {reason}")]
pub struct LocationUnavailable {
    pub reason: String,
}

impl LocationUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Current-position lookup. Called once per startup.
pub trait LocationProvider {
    fn request_location(&mut self) -> Result<Coords, LocationUnavailable>;
}

/// Map rendering. Clicks on the map reach the controller through
/// [`crate::controller::AppController::location_picked`].
pub trait MapSurface {
    /// Draw the map centred on `center`. Called at most once.
    fn load(&mut self, center: Coords, zoom: u8);

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup);

    fn pan_to(&mut self, coords: Coords, zoom: u8);
}

/// The new-workout form.
pub trait FormSurface {
    fn read_fields(&mut self) -> RawWorkoutInput;

    /// Open the form for a workout at `coords`.
    fn show(&mut self, coords: Coords);

    /// Close the form and clear its inputs.
    fn hide(&mut self);

    /// Show the cadence row for running, the elevation row for cycling.
    fn show_extra_field(&mut self, kind: WorkoutKind);
}

/// The workout list.
pub trait ListSurface {
    fn render_item(&mut self, workout: &Workout);
}

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    InvalidInput(ValidationError),
    LocationUnavailable(LocationUnavailable),
    SaveFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::InvalidInput(e) => e.to_string(),
            Notice::LocationUnavailable(e) => e.to_string(),
            Notice::SaveFailed(reason) => {
                format!("Your workout could not be saved and will be lost on reload: {reason}")
            }
        }
    }
}

/// User-visible alerts.
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// The full set of collaborators a controller drives.
pub struct Surfaces {
    pub location: Box<dyn LocationProvider>,
    pub map: Box<dyn MapSurface>,
    pub form: Box<dyn FormSurface>,
    pub list: Box<dyn ListSurface>,
    pub notifier: Box<dyn Notifier>,
}
