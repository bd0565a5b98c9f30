//! `tasknotes.toml` on disk.

use crate::config::{DEFAULT_END_THRESHOLD, DEFAULT_TIMEOUT_SECS, FieldCase};
use crate::error::config::ConfigError;

use common::ErrorLocation;
use models::DEFAULT_PAGE_SIZE;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "tasknotes.toml";
const CONFIG_DIR_NAME: &str = "tasknotes";
const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub field_case: FieldCase,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
            field_case: FieldCase::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSection {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Items from the end of the list at which the next page is requested.
    #[serde(default = "default_end_threshold")]
    pub end_threshold: usize,
}

impl Default for ListSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            end_threshold: default_end_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub list: ListSection,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerSection::default(),
            list: ListSection::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
fn default_end_threshold() -> usize {
    DEFAULT_END_THRESHOLD
}

/// `{config_dir}/tasknotes/tasknotes.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl FileConfig {
    /// Load the config file, using defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(path)
    }

    /// Load a config file that must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: FileConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config file {}: {}", path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Save config using temp file + rename so a crash never leaves a
    /// half-written file behind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, serialization, directory
    /// creation, write or rename fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = path.with_extension("toml.tmp");

        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, contents).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Config saved to {}", path.display());
        Ok(())
    }

    /// Validate values that can be checked without resolving the environment.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if let Some(ref url) = self.server.base_url {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: "server.base_url cannot be empty string".to_string(),
                });
            }
        }

        Ok(())
    }
}
