//! Platform-aware detection of the tasknotes data directory.
//!
//! Lookup order:
//! 1. TASKNOTES_DATA_DIR environment variable (explicit override)
//! 2. Platform-specific data directory via `dirs` crate
//! 3. Fallback paths for common configurations
//!
//! Returns Result, never silently falls back to a wrong path.

use crate::error::storage::StorageError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const DATA_DIR_ENV: &str = "TASKNOTES_DATA_DIR";
const APP_DIR_NAME: &str = "tasknotes";
const CREDENTIALS_FILE_NAME: &str = "credentials.json";
const LOG_DIR_NAME: &str = "logs";

/// Data directory detection result.
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Base data directory (e.g., ~/.local/share/tasknotes on Linux).
    pub data_dir: PathBuf,
    /// Path to credentials.json.
    pub credentials_file: PathBuf,
    /// Directory for tasknotes.log.
    pub log_dir: PathBuf,
    /// How the path was determined.
    pub source: PathSource,
}

impl DataPaths {
    fn under(data_dir: PathBuf, source: PathSource) -> Self {
        Self {
            credentials_file: data_dir.join(CREDENTIALS_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
            source,
        }
    }
}

/// How the path was determined (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Set via TASKNOTES_DATA_DIR.
    EnvVar,
    /// Detected via platform-specific XDG/AppData/Library path.
    PlatformDefault,
    /// Derived from HOME or APPDATA.
    HomeFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::EnvVar => write!(f, "{DATA_DIR_ENV}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::HomeFallback => write!(f, "home directory fallback"),
        }
    }
}

/// Detect the data paths for this installation.
///
/// # Errors
/// Returns [`StorageError::Unavailable`] if no directory can be determined.
///
/// # Platform Behavior
/// - **Linux**: `$XDG_DATA_HOME/tasknotes` or `~/.local/share/tasknotes`
/// - **macOS**: `~/Library/Application Support/tasknotes`
/// - **Windows**: `%LOCALAPPDATA%/tasknotes`
pub fn detect_data_paths() -> Result<DataPaths, StorageError> {
    if let Ok(custom_dir) = env::var(DATA_DIR_ENV) {
        if !custom_dir.trim().is_empty() {
            let data_dir = PathBuf::from(&custom_dir);
            info!("Using {DATA_DIR_ENV} override: {:?}", data_dir);
            return Ok(DataPaths::under(data_dir, PathSource::EnvVar));
        }
    }

    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_DIR_NAME);
        debug!("Platform data dir: {:?}", app_dir);
        return Ok(DataPaths::under(app_dir, PathSource::PlatformDefault));
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        if let Ok(home) = env::var("HOME") {
            #[cfg(target_os = "linux")]
            let data_dir = PathBuf::from(home).join(".local/share").join(APP_DIR_NAME);
            #[cfg(target_os = "macos")]
            let data_dir = PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR_NAME);

            warn!("Using HOME fallback path: {:?}", data_dir);
            return Ok(DataPaths::under(data_dir, PathSource::HomeFallback));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = env::var("APPDATA") {
            let data_dir = PathBuf::from(appdata).join(APP_DIR_NAME);
            warn!("Using APPDATA fallback path: {:?}", data_dir);
            return Ok(DataPaths::under(data_dir, PathSource::HomeFallback));
        }
    }

    Err(StorageError::Unavailable {
        message: format!("Cannot determine data directory. Set {DATA_DIR_ENV}."),
        location: ErrorLocation::from(Location::caller()),
    })
}
