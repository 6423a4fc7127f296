// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model for storage and display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A position on the map.
///
/// Stored as `[lat, lng]`, the order map libraries expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        [coords.lat, coords.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

/// Opaque workout identifier (32 lowercase hex characters for new records).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Activity type, the discriminant of a [`Workout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Discriminant as stored (`"running"` / `"cycling"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalised name for labels ("Running").
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownWorkoutKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(UnknownWorkoutKind(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown workout type: {0:?}")]
pub struct UnknownWorkoutKind(pub String);

/// Type-specific fields, tagged by `type` in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        #[serde(rename = "cadenceSpm")]
        cadence_spm: f64,
        /// Minutes per kilometre, fixed at creation
        #[serde(rename = "paceMinPerKm")]
        pace_min_per_km: f64,
    },
    Cycling {
        /// Metres climbed (may be negative)
        #[serde(rename = "elevationGainM")]
        elevation_gain_m: f64,
        /// Kilometres per hour, fixed at creation
        #[serde(rename = "speedKmPerH")]
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    /// Pace (running) or speed (cycling) for the given distance and duration.
    pub fn derived_metric(kind: WorkoutKind, distance_km: f64, duration_min: f64) -> f64 {
        match kind {
            WorkoutKind::Running => duration_min / distance_km,
            WorkoutKind::Cycling => distance_km / (duration_min / 60.0),
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// One logged workout.
///
/// Only [`crate::services::WorkoutFactory`] creates new records and only
/// the persistence layer rehydrates old ones, so every field except the
/// usage counter is read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    id: WorkoutId,
    #[serde(with = "crate::time_utils::rfc3339_millis")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    created_at: DateTime<Utc>,
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    coords: Coords,
    distance_km: f64,
    duration_min: f64,
    #[serde(flatten)]
    details: WorkoutDetails,
    /// Times the record was activated from the list (session only)
    #[serde(skip)]
    usage_count: u32,
}

impl Workout {
    /// Build a running record, computing pace.
    pub(crate) fn running(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            details: WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: WorkoutDetails::derived_metric(
                    WorkoutKind::Running,
                    distance_km,
                    duration_min,
                ),
            },
            usage_count: 0,
        }
    }

    /// Build a cycling record, computing speed.
    pub(crate) fn cycling(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            details: WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: WorkoutDetails::derived_metric(
                    WorkoutKind::Cycling,
                    distance_km,
                    duration_min,
                ),
            },
            usage_count: 0,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    /// Pace in min/km, running only.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h, cycling only.
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn usage_count(&self) -> u32 {
        self.usage_count
    }

    pub(crate) fn mark_used(&mut self) {
        self.usage_count = self.usage_count.saturating_add(1);
    }
}
