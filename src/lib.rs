// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Map Log: log runs and rides against the spot they happened.
//!
//! This crate provides the workout model and its validation, the ordered
//! history with its key-value persistence, and the controller that ties
//! the map, form and list surfaces together.

pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod surfaces;
pub mod time_utils;

pub use controller::{AppController, FormState, MapState};
