use crate::api_client::ApiClient;
use crate::error::api_client::ApiClientError;
use crate::list_sync::PageFetcher;

use models::{ListParams, Paginated};

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Paginated endpoint bound to a client, usable as a list controller source.
pub struct ResourcePages<T> {
    client: ApiClient,
    endpoint: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> ResourcePages<T> {
    pub(crate) fn new(client: ApiClient, endpoint: &'static str) -> Self {
        Self {
            client,
            endpoint,
            _item: PhantomData,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T> PageFetcher<T> for ResourcePages<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, params: &ListParams) -> Result<Paginated<T>, ApiClientError> {
        self.client.get_with_params(self.endpoint, params).await
    }
}
