use common::ErrorLocation;

use std::io::Error as IoError;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Failures of the platform key-value store backing the session.
///
/// Absence of a key is never an error; `get` returns `None` for that.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("Storage Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage IO Error: {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: IoError,
    },

    #[error("Storage Corrupt Error: {path}: {reason} {location}")]
    Corrupt {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },
}
