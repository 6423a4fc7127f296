// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use workout_map_log::config::Config;
use workout_map_log::db::{KeyValueStore, MemoryStore, StorageError};
use workout_map_log::models::{Coords, MarkerPopup, RawWorkoutInput, Workout, WorkoutId, WorkoutKind};
use workout_map_log::services::WorkoutFactory;
use workout_map_log::surfaces::{
    FormSurface, ListSurface, LocationProvider, LocationUnavailable, MapSurface, Notice, Notifier,
    Surfaces,
};
use workout_map_log::AppController;

/// Madrid, used as the "current position" in tests.
#[allow(dead_code)]
pub const HOME: Coords = Coords {
    lat: 40.4168,
    lng: -3.7038,
};

/// Fixed creation time for deterministic labels.
#[allow(dead_code)]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
}

/// Everything the controller asked the surfaces to do.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Event {
    MapLoaded(Coords, u8),
    Marker(Coords, MarkerPopup),
    PanTo(Coords, u8),
    FormShown(Coords),
    FormHidden,
    ExtraField(WorkoutKind),
    ListItem(WorkoutId),
    Notice(Notice),
}

/// Fake for every surface, sharing one event log.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    form_input: Rc<RefCell<RawWorkoutInput>>,
    location: Rc<RefCell<Option<Coords>>>,
}

#[allow(dead_code)]
impl Recorder {
    /// Recorder whose location provider reports `HOME`.
    pub fn at_home() -> Self {
        let rec = Self::default();
        *rec.location.borrow_mut() = Some(HOME);
        rec
    }

    /// Recorder whose location provider fails.
    pub fn without_location() -> Self {
        Self::default()
    }

    pub fn surfaces(&self) -> Surfaces {
        Surfaces {
            location: Box::new(self.clone()),
            map: Box::new(self.clone()),
            form: Box::new(self.clone()),
            list: Box::new(self.clone()),
            notifier: Box::new(self.clone()),
        }
    }

    /// What the form will return on the next submit.
    pub fn fill_form(&self, kind: &str, distance: &str, duration: &str, extra: &str) {
        let mut input = RawWorkoutInput {
            kind: kind.to_string(),
            distance_km: distance.to_string(),
            duration_min: duration.to_string(),
            ..Default::default()
        };
        if kind == "cycling" {
            input.elevation_gain_m = extra.to_string();
        } else {
            input.cadence_spm = extra.to_string();
        }
        *self.form_input.borrow_mut() = input;
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn list_items(&self) -> Vec<WorkoutId> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::ListItem(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn markers(&self) -> Vec<(Coords, MarkerPopup)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Marker(c, p) => Some((c, p)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl LocationProvider for Recorder {
    fn request_location(&mut self) -> Result<Coords, LocationUnavailable> {
        self.location
            .borrow()
            .ok_or_else(|| LocationUnavailable::new("permission denied"))
    }
}

impl MapSurface for Recorder {
    fn load(&mut self, center: Coords, zoom: u8) {
        self.push(Event::MapLoaded(center, zoom));
    }

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) {
        self.push(Event::Marker(coords, popup.clone()));
    }

    fn pan_to(&mut self, coords: Coords, zoom: u8) {
        self.push(Event::PanTo(coords, zoom));
    }
}

impl FormSurface for Recorder {
    fn read_fields(&mut self) -> RawWorkoutInput {
        self.form_input.borrow().clone()
    }

    fn show(&mut self, coords: Coords) {
        self.push(Event::FormShown(coords));
    }

    fn hide(&mut self) {
        self.form_input.replace(RawWorkoutInput::default());
        self.push(Event::FormHidden);
    }

    fn show_extra_field(&mut self, kind: WorkoutKind) {
        self.push(Event::ExtraField(kind));
    }
}

impl ListSurface for Recorder {
    fn render_item(&mut self, workout: &Workout) {
        self.push(Event::ListItem(workout.id().clone()));
    }
}

impl Notifier for Recorder {
    fn notify(&mut self, notice: &Notice) {
        self.push(Event::Notice(notice.clone()));
    }
}

/// Key-value store whose writes always fail.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct ReadOnlyStore(pub MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "quota exceeded"),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.0.remove(key)
    }
}

/// Controller over `kv` with a fixed clock.
#[allow(dead_code)]
pub fn create_test_app<S: KeyValueStore>(kv: S, rec: &Recorder) -> AppController<S> {
    AppController::new(
        &Config::default(),
        kv,
        WorkoutFactory::with_clock(fixed_time),
        rec.surfaces(),
    )
}

/// Started controller with the map loaded at `HOME`.
#[allow(dead_code)]
pub fn started_app(kv: MemoryStore) -> (AppController<MemoryStore>, Recorder) {
    let rec = Recorder::at_home();
    let mut app = create_test_app(kv, &rec);
    app.start().expect("start should succeed with a location");
    rec.clear();
    (app, rec)
}
