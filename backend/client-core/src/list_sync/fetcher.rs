use crate::error::api_client::ApiClientError;

use models::{ListParams, Paginated};

use async_trait::async_trait;

/// Source of pages for a [`ListController`](super::ListController).
///
/// Implemented by [`ResourcePages`](crate::api_client::ResourcePages) for
/// the backend's paginated endpoints.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch_page(&self, params: &ListParams) -> Result<Paginated<T>, ApiClientError>;
}
