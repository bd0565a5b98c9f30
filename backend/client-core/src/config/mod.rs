//! Client configuration resolved once at startup.
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults (`http://localhost:9000`, 30 s timeout, 10 items per page)
//! 2. `tasknotes.toml` in the platform config directory, or an explicit path
//! 3. Environment (`API_BASE_URL`, `TASKNOTES_TIMEOUT_SECS`, `TASKNOTES_PAGE_SIZE`),
//!    after loading `.env` from the working or executable directory

pub mod env;
pub mod file;

pub use file::FileConfig;

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const TIMEOUT_ENV: &str = "TASKNOTES_TIMEOUT_SECS";
pub const PAGE_SIZE_ENV: &str = "TASKNOTES_PAGE_SIZE";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_END_THRESHOLD: usize = 3;

const MAX_TIMEOUT_SECS: u64 = 300;
const MAX_PAGE_SIZE: u32 = 100;

/// JSON key spelling used for request bodies.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldCase {
    /// `{"title": ..., "due_date": ...}`
    #[default]
    Snake,
    /// `{"Title": ..., "DueDate": ...}`
    Pascal,
}

/// Where the effective base URL came from (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Env,
    File,
    Default,
}

impl std::fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseUrlSource::Env => write!(f, "{BASE_URL_ENV}"),
            BaseUrlSource::File => write!(f, "config file"),
            BaseUrlSource::Default => write!(f, "built-in default"),
        }
    }
}

/// Fully resolved, validated configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub base_url_source: BaseUrlSource,
    pub timeout: Duration,
    pub field_case: FieldCase,
    pub page_size: u32,
    pub end_threshold: usize,
}

impl ClientConfig {
    /// Resolve configuration from `.env`, the config file and the process
    /// environment.
    ///
    /// `config_path` overrides the platform config file location.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_result = env::try_load_dotenv();
        if !env_result.loaded {
            debug!("No .env file found - using process environment only");
        }

        let file_config = match config_path {
            Some(path) => FileConfig::load_from_path(path)?,
            None => match file::default_config_path() {
                Some(path) => FileConfig::load(&path)?,
                None => FileConfig::default(),
            },
        };

        let config = Self::from_sources(&file_config, |name| std::env::var(name).ok())?;

        info!(
            "API base URL {} (from {})",
            config.base_url, config.base_url_source
        );
        Ok(config)
    }

    /// Merge a parsed config file with an environment lookup.
    ///
    /// `lookup` returns the value of an environment variable, if set.
    #[track_caller]
    pub fn from_sources<F>(file_config: &FileConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_base_url = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty());

        let (raw_base_url, base_url_source) = match (env_base_url, &file_config.server.base_url) {
            (Some(url), _) => (url, BaseUrlSource::Env),
            (None, Some(url)) => (url.clone(), BaseUrlSource::File),
            (None, None) => (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default),
        };

        let base_url = parse_base_url(&raw_base_url)?;

        let timeout_secs = match lookup(TIMEOUT_ENV) {
            Some(value) => env::parse_var::<u64>(TIMEOUT_ENV, &value)?,
            None => file_config.server.timeout_secs,
        };

        let page_size = match lookup(PAGE_SIZE_ENV) {
            Some(value) => env::parse_var::<u32>(PAGE_SIZE_ENV, &value)?,
            None => file_config.list.page_size,
        };

        let config = Self {
            base_url,
            base_url_source,
            timeout: Duration::from_secs(timeout_secs),
            field_case: file_config.server.field_case,
            page_size,
            end_threshold: file_config.list.end_threshold,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate resolved values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is out of range.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timeout_secs = self.timeout.as_secs();
        if timeout_secs == 0 || timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {timeout_secs}s (must be 1-{MAX_TIMEOUT_SECS})"
                ),
            });
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid page size: {} (must be 1-{MAX_PAGE_SIZE})",
                    self.page_size
                ),
            });
        }

        Ok(())
    }
}

/// Parse and normalize a base URL so that relative endpoints join under it.
#[track_caller]
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid URL format: {trimmed}"),
        });
    }

    let mut url = Url::parse(trimmed).map_err(|e| ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("Invalid URL {trimmed}: {e}"),
    })?;

    // `Url::join` replaces the last path segment unless the path ends in '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
