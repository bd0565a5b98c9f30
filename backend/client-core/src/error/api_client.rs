use crate::error::storage::StorageError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Everything that can go wrong between building a request and holding a
/// parsed response body.
///
/// 401/403 responses are ordinary [`ApiClientError::Status`] values; use
/// [`ApiClientError::is_authorization`] to tell them apart.
#[derive(Debug, ThisError)]
pub enum ApiClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Status Error: HTTP {status_code} - {message} {location}")]
    Status {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed Response Error: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session Storage Error: {source} {location}")]
    Storage {
        location: ErrorLocation,
        #[source]
        source: StorageError,
    },
}

impl ApiClientError {
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            ApiClientError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Backend rejected the session (401/403).
    pub fn is_authorization(&self) -> bool {
        self.status_code()
            .is_some_and(|status| status.is_authorization())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiClientError::Http { is_timeout: true, .. })
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return ApiClientError::Json {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ApiClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: is_connect(&error),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(error: &reqwest::Error) -> bool {
    error.is_connect()
}

// The browser fetch API does not distinguish connection failures
#[cfg(target_arch = "wasm32")]
fn is_connect(_error: &reqwest::Error) -> bool {
    false
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for ApiClientError {
    #[track_caller]
    fn from(error: StorageError) -> Self {
        ApiClientError::Storage {
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}

impl From<models::ModelError> for ApiClientError {
    #[track_caller]
    fn from(error: models::ModelError) -> Self {
        ApiClientError::MalformedResponse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
