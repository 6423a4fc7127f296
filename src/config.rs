//! Application configuration loaded from environment variables.

use crate::db::keys;
use crate::models::Coords;
use std::env;
use std::path::PathBuf;

/// Zoom used when the map opens and when panning to a workout.
pub const DEFAULT_MAP_ZOOM: u8 = 17;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the file-backed key-value store
    pub data_dir: PathBuf,
    /// Key the workout history is stored under
    pub storage_key: String,
    /// Map zoom level
    pub map_zoom: u8,
    /// Fixed position reported by the headless location provider
    pub home: Option<Coords>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_key: keys::WORKOUTS.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
            home: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let storage_key =
            env::var("WORKOUT_STORAGE_KEY").unwrap_or_else(|_| keys::WORKOUTS.to_string());
        if storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("WORKOUT_STORAGE_KEY", storage_key));
        }

        Ok(Self {
            data_dir: env::var("WORKOUT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            storage_key,
            map_zoom: env::var("MAP_ZOOM_LEVEL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAP_ZOOM),
            home: home_from_env()?,
        })
    }
}

/// Both `HOME_LATITUDE` and `HOME_LONGITUDE`, or neither.
fn home_from_env() -> Result<Option<Coords>, ConfigError> {
    let lat = env::var("HOME_LATITUDE").ok();
    let lng = env::var("HOME_LONGITUDE").ok();

    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let lat: f64 = lat
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("HOME_LATITUDE", lat.clone()))?;
            let lng: f64 = lng
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("HOME_LONGITUDE", lng.clone()))?;
            Ok(Some(Coords::new(lat, lng)))
        }
        (None, Some(_)) => Err(ConfigError::Missing("HOME_LATITUDE")),
        (Some(_), None) => Err(ConfigError::Missing("HOME_LONGITUDE")),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
