use crate::credential_store::CredentialStore;
use crate::error::storage::StorageError;

use common::ErrorLocation;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::Mutex;

/// Native store: a flat JSON object on disk.
///
/// Writes go through temp file + rename, so readers see either the old or
/// the new map. A process-local lock serializes read-modify-write cycles.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Credential file {} not found, treating as empty", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    location: ErrorLocation::from(Location::caller()),
                    source: e,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            warn!("Credential file {} is not valid JSON: {}", self.path.display(), e);
            StorageError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::Io {
                    path: dir.to_path_buf(),
                    location: ErrorLocation::from(Location::caller()),
                    source: e,
                })?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| StorageError::Io {
                path: temp_path.clone(),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;

        restrict_permissions(&temp_path).await?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::Io {
                path: self.path.clone(),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })
    }
}

/// Owner read/write only.
#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .await
        .map_err(|e| StorageError::Io {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), StorageError> {
    Ok(())
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;

        debug!("Stored credential '{key}' in {}", self.path.display());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_none() {
            debug!("Credential '{key}' already absent");
            return Ok(());
        }
        self.write_entries(&entries).await?;

        debug!("Deleted credential '{key}' from {}", self.path.display());
        Ok(())
    }
}
