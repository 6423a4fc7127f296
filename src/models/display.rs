// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display data handed to the map and list surfaces.
//!
//! The surfaces own the markup; these types only carry the text.

use crate::models::workout::{Workout, WorkoutDetails, WorkoutKind};
use crate::time_utils::month_day_label;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPopup {
    /// e.g. "Running on October 19"
    pub label: String,
    /// e.g. "Running workout"
    pub content: String,
    /// e.g. "running-popup"
    pub class_name: String,
}

/// One line of a list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl SummaryRow {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

impl Workout {
    pub fn marker_label(&self) -> String {
        format!(
            "{} on {}",
            self.kind().display_name(),
            month_day_label(self.created_at())
        )
    }

    pub fn popup(&self) -> MarkerPopup {
        let kind = self.kind();
        MarkerPopup {
            label: self.marker_label(),
            content: format!("{} workout", kind.display_name()),
            class_name: format!("{}-popup", kind.as_str()),
        }
    }

    /// Rows for the list entry: distance, duration, then the derived
    /// metric and the type-specific field.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        let distance_icon = match self.kind() {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        };

        let mut rows = vec![
            SummaryRow::new(distance_icon, format_number(self.distance_km()), "km"),
            SummaryRow::new("⏱", format_number(self.duration_min()), "min"),
        ];

        match *self.details() {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                rows.push(SummaryRow::new("⚡️", format!("{:.1}", pace_min_per_km), "min/km"));
                rows.push(SummaryRow::new("🦶🏼", format_number(cadence_spm), "spm"));
            }
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                rows.push(SummaryRow::new("⚡️", format!("{:.1}", speed_km_per_h), "km/h"));
                rows.push(SummaryRow::new("⛰", format_number(elevation_gain_m), "m"));
            }
        }

        rows
    }
}

/// Whole numbers without a trailing ".0", everything else as-is.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
