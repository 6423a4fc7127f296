// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout validation and construction.
//!
//! Every new record goes through [`WorkoutFactory`]:
//! 1. Parse the activity type
//! 2. Check each numeric field is finite, and positive where required
//! 3. Assign a random id and creation time
//! 4. Compute the derived metric (pace or speed)

use crate::error::{AppError, Result};
use crate::models::input::parse_field;
use crate::models::{Coords, RawWorkoutInput, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
use chrono::{DateTime, SubsecRound, Utc};
use ring::rand::{SecureRandom, SystemRandom};
use std::fmt;

/// Source of creation timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Workout ids are 128 random bits.
const ID_BYTES: usize = 16;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Type,
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl Field {
    /// Name of the field in stored records and form input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Distance => "distanceKm",
            Field::Duration => "durationMin",
            Field::Cadence => "cadenceSpm",
            Field::Elevation => "elevationGainM",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} must be a number")]
    NotANumber(Field),

    #[error("{0} must be positive")]
    NotPositive(Field),

    #[error("{0} is out of range")]
    OutOfRange(Field),

    #[error("unknown workout type {0:?}")]
    UnknownType(String),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NotANumber(f) | FieldError::NotPositive(f) | FieldError::OutOfRange(f) => {
                *f
            }
            FieldError::UnknownType(_) => Field::Type,
        }
    }
}

/// Rejected workout input. Lists every failing field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Form data is not correct: {}", join_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Failing fields, in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(FieldError::field).collect()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates input and builds [`Workout`] records.
#[derive(Clone)]
pub struct WorkoutFactory {
    rng: SystemRandom,
    clock: Clock,
}

impl Default for WorkoutFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutFactory {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Factory with a fixed time source (tests, replays).
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            rng: SystemRandom::new(),
            clock,
        }
    }

    /// Create a workout from typed values.
    ///
    /// `extra` is the cadence (steps/min) for running and the elevation
    /// gain (m) for cycling. Cadence must be positive; elevation only
    /// has to be finite, since a route can lose height overall.
    pub fn create(
        &self,
        kind: WorkoutKind,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Result<Workout> {
        self.build(
            kind,
            coords,
            Some(distance_km),
            Some(duration_min),
            Some(extra),
        )
    }

    /// Create a workout from raw form text.
    pub fn create_from_input(&self, input: &RawWorkoutInput, coords: Coords) -> Result<Workout> {
        let kind = input
            .kind
            .parse::<WorkoutKind>()
            .map_err(|e| ValidationError {
                errors: vec![FieldError::UnknownType(e.0)],
            })?;

        let extra = match kind {
            WorkoutKind::Running => &input.cadence_spm,
            WorkoutKind::Cycling => &input.elevation_gain_m,
        };

        self.build(
            kind,
            coords,
            parse_field(&input.distance_km),
            parse_field(&input.duration_min),
            parse_field(extra),
        )
    }

    fn build(
        &self,
        kind: WorkoutKind,
        coords: Coords,
        distance_km: Option<f64>,
        duration_min: Option<f64>,
        extra: Option<f64>,
    ) -> Result<Workout> {
        let mut errors = Vec::new();
        let distance_km = check(Field::Distance, distance_km, true, &mut errors);
        let duration_min = check(Field::Duration, duration_min, true, &mut errors);
        let extra = match kind {
            WorkoutKind::Running => check(Field::Cadence, extra, true, &mut errors),
            WorkoutKind::Cycling => check(Field::Elevation, extra, false, &mut errors),
        };

        // Each value can be fine while their ratio overflows. JSON has no
        // infinity, so such a record would make the saved history unreadable.
        if errors.is_empty()
            && !WorkoutDetails::derived_metric(kind, distance_km, duration_min).is_finite()
        {
            errors.push(FieldError::OutOfRange(Field::Distance));
            errors.push(FieldError::OutOfRange(Field::Duration));
        }

        if !errors.is_empty() {
            let err = ValidationError { errors };
            tracing::debug!(kind = %kind, error = %err, "Rejected workout input");
            return Err(err.into());
        }

        let id = self.next_id()?;
        // Stored timestamps carry milliseconds; keep memory and storage equal.
        let created_at = (self.clock)().trunc_subsecs(3);
        let workout = match kind {
            WorkoutKind::Running => {
                Workout::running(id, created_at, coords, distance_km, duration_min, extra)
            }
            WorkoutKind::Cycling => {
                Workout::cycling(id, created_at, coords, distance_km, duration_min, extra)
            }
        };

        tracing::info!(
            id = %workout.id(),
            kind = %kind,
            coords = %coords,
            distance_km,
            duration_min,
            "Workout created"
        );
        Ok(workout)
    }

    fn next_id(&self) -> Result<WorkoutId> {
        let mut bytes = [0u8; ID_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG failed")))?;
        Ok(WorkoutId::from(hex::encode(bytes)))
    }
}

/// Record a failure for `field` if `value` is missing, non-finite, or
/// (when `positive`) not strictly greater than zero.
fn check(field: Field, value: Option<f64>, positive: bool, errors: &mut Vec<FieldError>) -> f64 {
    match value {
        Some(v) if !v.is_finite() => errors.push(FieldError::NotANumber(field)),
        None => errors.push(FieldError::NotANumber(field)),
        Some(v) if positive && v <= 0.0 => errors.push(FieldError::NotPositive(field)),
        Some(_) => {}
    }
    value.unwrap_or(f64::NAN)
}
