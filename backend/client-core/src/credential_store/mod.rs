//! Persistent key-value storage for the session token.
//!
//! Two platform backends behind one capability trait:
//!
//! - **Native**: `FileCredentialStore`, a JSON map in the platform data
//!   directory (`TASKNOTES_DATA_DIR` overrides it)
//! - **Web** (`wasm32`): `LocalStorageCredentialStore` over `window.localStorage`
//!
//! The backend is chosen at compile time for the target and exposed through
//! [`platform_store`]; nothing downstream branches on the platform.
//! [`MemoryCredentialStore`] is the in-process variant used for tests and
//! `--ephemeral` sessions.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;
mod memory;
#[cfg(not(target_arch = "wasm32"))]
pub mod paths;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileCredentialStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageCredentialStore;
pub use memory::MemoryCredentialStore;

use crate::error::storage::StorageError;

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use once_cell::sync::Lazy;

/// Key under which the session token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Async key-value capability backing the session.
///
/// Implementations must make each call atomic from the caller's point of
/// view. Absence is `Ok(None)`, never an error. Browser futures are not
/// `Send`, so on wasm the returned futures drop that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CredentialStore: Send + Sync {
    /// Persist `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Stored value, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Runtime platform the binary was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Native,
    Web,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Native => write!(f, "native"),
            Platform::Web => write!(f, "web"),
        }
    }
}

static PLATFORM: Lazy<Platform> = Lazy::new(|| {
    let platform = if cfg!(target_arch = "wasm32") {
        Platform::Web
    } else {
        Platform::Native
    };
    info!("Credential store platform: {platform}");
    platform
});

impl Platform {
    /// Resolved once per process.
    pub fn current() -> Platform {
        *PLATFORM
    }
}

/// Build the credential store for the compiled platform.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] if the backing store cannot be
/// located (no data directory on native, no `localStorage` on web).
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> Result<Arc<dyn CredentialStore>, StorageError> {
    debug_assert_eq!(Platform::current(), Platform::Native);
    let data_paths = paths::detect_data_paths()?;
    Ok(Arc::new(FileCredentialStore::new(data_paths.credentials_file)))
}

/// Build the credential store for the compiled platform.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] if `window.localStorage` is
/// missing or disabled.
#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> Result<Arc<dyn CredentialStore>, StorageError> {
    debug_assert_eq!(Platform::current(), Platform::Web);
    LocalStorageCredentialStore::probe()?;
    Ok(Arc::new(LocalStorageCredentialStore::new()))
}
