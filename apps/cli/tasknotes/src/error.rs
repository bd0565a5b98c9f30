use client_core::error::{ApiClientError, ConfigError, CoreError, ListSyncError, StorageError};

use common::ErrorLocation;
use models::ModelError;

use std::panic::Location;
use std::process::ExitCode;

use thiserror::Error;

/// Errors surfaced by `tasknotes` commands.
///
/// Everything from `client-core` is wrapped in [`TasknotesError::Core`] so
/// the underlying variant and its location are kept for the log.
#[derive(Debug, Error)]
pub enum TasknotesError {
    /// Error from this App
    #[error("Tasknotes Error: {message} {location}")]
    Tasknotes {
        message: String,
        location: ErrorLocation,
    },

    /// Invalid command input (missing title, bad date, ...)
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (config, storage, HTTP, lists)
    #[error("Core Error: {source} {location}")]
    Core {
        location: ErrorLocation,
        #[source]
        source: CoreError,
    },
}

impl TasknotesError {
    /// The backend rejected the stored session.
    pub fn is_authorization(&self) -> bool {
        match self {
            TasknotesError::Core {
                source: CoreError::ApiClient(e),
                ..
            } => e.is_authorization(),
            TasknotesError::Core {
                source: CoreError::ListSync(e),
                ..
            } => e.api_error().is_authorization(),
            _ => false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            TasknotesError::Input { .. } => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

impl From<CoreError> for TasknotesError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        TasknotesError::Core {
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}

macro_rules! from_core_error {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$error> for TasknotesError {
                #[track_caller]
                fn from(error: $error) -> Self {
                    TasknotesError::Core {
                        location: ErrorLocation::from(Location::caller()),
                        source: CoreError::from(error),
                    }
                }
            }
        )+
    };
}

from_core_error!(ApiClientError, ConfigError, ListSyncError, StorageError);

impl From<ModelError> for TasknotesError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let ModelError::Validation { message, .. } = error;
        TasknotesError::Input {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
