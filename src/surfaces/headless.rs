// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Surfaces for running without a browser.
//!
//! Map and form calls become log lines; the list prints to any writer.

use super::{
    FormSurface, ListSurface, LocationProvider, LocationUnavailable, MapSurface, Notice, Notifier,
    Surfaces,
};
use crate::models::{Coords, MarkerPopup, RawWorkoutInput, Workout, WorkoutKind};
use std::io::Write;

/// Always reports the same position, or none.
pub struct FixedLocation(pub Option<Coords>);

impl LocationProvider for FixedLocation {
    fn request_location(&mut self) -> Result<Coords, LocationUnavailable> {
        self.0
            .ok_or_else(|| LocationUnavailable::new("no home position configured"))
    }
}

pub struct LogMap;

impl MapSurface for LogMap {
    fn load(&mut self, center: Coords, zoom: u8) {
        tracing::info!(center = %center, zoom, "Map loaded");
    }

    fn place_marker(&mut self, coords: Coords, popup: &MarkerPopup) {
        tracing::info!(coords = %coords, label = %popup.label, class = %popup.class_name, "Marker placed");
    }

    fn pan_to(&mut self, coords: Coords, zoom: u8) {
        tracing::info!(coords = %coords, zoom, "Map panned");
    }
}

/// A form nobody fills in.
pub struct EmptyForm;

impl FormSurface for EmptyForm {
    fn read_fields(&mut self) -> RawWorkoutInput {
        RawWorkoutInput::default()
    }

    fn show(&mut self, coords: Coords) {
        tracing::debug!(coords = %coords, "Form shown");
    }

    fn hide(&mut self) {
        tracing::debug!("Form hidden");
    }

    fn show_extra_field(&mut self, kind: WorkoutKind) {
        tracing::debug!(kind = %kind, "Form field toggled");
    }
}

/// Writes one line per workout.
pub struct TextList<W> {
    out: W,
}

impl<W: Write> TextList<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ListSurface for TextList<W> {
    fn render_item(&mut self, workout: &Workout) {
        let rows: Vec<String> = workout
            .summary_rows()
            .iter()
            .map(|r| format!("{} {} {}", r.icon, r.value, r.unit))
            .collect();
        let line = format!("{}  {}", workout.marker_label(), rows.join("  "));
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %e, "Failed to write workout line");
        }
    }
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        tracing::warn!(message = %notice.message(), "User notice");
    }
}

/// Headless surfaces printing the list to stdout.
pub fn stdout_surfaces(home: Option<Coords>) -> Surfaces {
    Surfaces {
        location: Box::new(FixedLocation(home)),
        map: Box::new(LogMap),
        form: Box::new(EmptyForm),
        list: Box::new(TextList::new(std::io::stdout())),
        notifier: Box::new(LogNotifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutKind;
    use crate::services::WorkoutFactory;

    #[test]
    fn test_fixed_location() {
        let here = Coords::new(1.0, 2.0);
        assert_eq!(FixedLocation(Some(here)).request_location(), Ok(here));
        assert!(FixedLocation(None).request_location().is_err());
    }

    #[test]
    fn test_text_list_writes_summary_line() {
        let workout = WorkoutFactory::new()
            .create(WorkoutKind::Running, Coords::new(0.0, 0.0), 5.0, 30.0, 160.0)
            .unwrap();

        let mut buf = Vec::new();
        TextList::new(&mut buf).render_item(&workout);
        let line = String::from_utf8(buf).unwrap();

        assert!(line.starts_with("Running on "));
        assert!(line.contains("6.0 min/km"));
        assert!(line.ends_with("160 spm\n"));
    }
}
