use crate::credential_store::CredentialStore;
use crate::error::storage::StorageError;

use common::ErrorLocation;

use std::panic::Location;

use async_trait::async_trait;
use web_sys::{Storage, window};

/// Web store over `window.localStorage`.
///
/// Holds no handle: `Storage` is not `Send`, so each call looks it up.
#[derive(Debug, Default)]
pub struct LocalStorageCredentialStore;

impl LocalStorageCredentialStore {
    pub fn new() -> Self {
        Self
    }

    /// Check that `localStorage` is reachable in this browsing context.
    pub fn probe() -> Result<(), StorageError> {
        local_storage().map(|_| ())
    }
}

#[track_caller]
fn local_storage() -> Result<Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable {
            message: String::from("window.localStorage is not available"),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn js_failure(operation: &str, key: &str) -> StorageError {
    StorageError::Unavailable {
        message: format!("localStorage.{operation}('{key}') failed"),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait(?Send)]
impl CredentialStore for LocalStorageCredentialStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| js_failure("setItem", key))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| js_failure("getItem", key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| js_failure("removeItem", key))
    }
}
