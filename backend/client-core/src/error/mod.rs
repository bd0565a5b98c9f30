pub mod api_client;
pub mod config;
pub mod list_sync;
pub mod storage;

pub use api_client::ApiClientError;
pub use config::ConfigError;
pub use list_sync::ListSyncError;
pub use storage::StorageError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    ApiClient(#[from] ApiClientError),

    #[error(transparent)]
    ListSync(#[from] ListSyncError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
