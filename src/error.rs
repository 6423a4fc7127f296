// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! None of these are fatal: the controller recovers from each one with a
//! user-visible notice or a log line. Unreadable stored history and
//! unknown list ids never become errors at all; they are logged and
//! treated as "nothing there".

use crate::db::StorageError;
use crate::services::factory::ValidationError;
use crate::surfaces::LocationUnavailable;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    LocationUnavailable(#[from] LocationUnavailable),

    #[error("No location picked on the map")]
    NoPendingLocation,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for errors the user can fix by editing the form.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Result type alias for controller and factory operations
pub type Result<T> = std::result::Result<T, AppError>;
