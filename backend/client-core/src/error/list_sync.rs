use crate::error::api_client::ApiClientError;

use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Failures surfaced by the list controller after it has already alerted
/// the user and restored the pre-fetch state.
#[derive(Debug, ThisError)]
pub enum ListSyncError {
    #[error("List Fetch Error: page {page}: {source} {location}")]
    Fetch {
        page: u32,
        location: ErrorLocation,
        #[source]
        source: ApiClientError,
    },

    #[error("List Delete Error: {source} {location}")]
    Delete {
        location: ErrorLocation,
        #[source]
        source: ApiClientError,
    },
}

impl ListSyncError {
    pub fn api_error(&self) -> &ApiClientError {
        match self {
            ListSyncError::Fetch { source, .. } | ListSyncError::Delete { source, .. } => source,
        }
    }
}
