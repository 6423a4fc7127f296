// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw form input, as read from the form surface.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Unparsed field values of the new-workout form.
///
/// Only the field matching `kind` (cadence or elevation) is consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct RawWorkoutInput {
    /// "running" or "cycling"
    #[serde(rename = "type")]
    pub kind: String,
    pub distance_km: String,
    pub duration_min: String,
    pub cadence_spm: String,
    pub elevation_gain_m: String,
}

/// Parse a numeric form field.
///
/// Blank fields are `None`; anything else that is not a number parses
/// to NaN so the finiteness check rejects it.
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse().unwrap_or(f64::NAN))
}
