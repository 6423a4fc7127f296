// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod display;
pub mod input;
pub mod workout;

pub use display::{MarkerPopup, SummaryRow};
pub use input::RawWorkoutInput;
pub use workout::{Coords, UnknownWorkoutKind, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
