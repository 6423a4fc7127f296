// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod factory;
pub mod store;

pub use factory::{Field, FieldError, ValidationError, WorkoutFactory};
pub use store::WorkoutStore;
