//! Authenticated HTTP access to the tasknotes backend.
//!
//! Every request goes through [`ApiClient::authorize`], which reads the
//! session token and attaches `Authorization: Bearer <token>` when one is
//! stored. Non-2xx responses become [`ApiClientError::Status`]; nothing is
//! retried, cached or refreshed here.

mod pages;
mod resources;

pub use pages::ResourcePages;

use crate::config::{ClientConfig, FieldCase};
use crate::error::api_client::ApiClientError;
use crate::field_normalizer::{denormalize_json, normalize_json};
use crate::session::Session;

use common::{ErrorLocation, HttpStatusCode};
use models::{ListParams, Paginated};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    session: Session,
    field_case: FieldCase,
    timeout: Duration,
}

impl ApiClient {
    /// Build the client once per process from resolved configuration.
    ///
    /// The timeout is set on each request. Browser builds leave the user agent
    /// to the browser.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiClientError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(crate::USER_AGENT);
        let client = builder.build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            session,
            field_case: config.field_case,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Request interceptor: attach the bearer token if one is stored.
    ///
    /// Suspends until the credential store read completes. A missing or
    /// unreadable token leaves the request unauthenticated.
    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token_for_request().await {
            Some(token) => request.header(AUTHORIZATION, token.bearer()),
            None => {
                debug!("No session token, sending request unauthenticated");
                request
            }
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn encode_body<B>(&self, body: &B) -> Result<Value, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body)?;
        Ok(match self.field_case {
            FieldCase::Snake => value,
            FieldCase::Pascal => denormalize_json(value),
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiClientError> {
        let request = self.authorize(request.timeout(self.timeout)).await;
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let status_code = HttpStatusCode::from(status.as_u16());
            if status_code.is_authorization() {
                warn!("Backend rejected session: HTTP {status_code}");
            }
            return Err(ApiClientError::Status {
                status_code,
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response)
    }

    /// Read a JSON body, normalizing backend field names first.
    async fn read_json<T>(response: Response) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let bytes = response.bytes().await?;
        let json: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(serde_json::from_value(normalize_json(json))?)
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("GET {url}");

        let response = self.send(self.client.get(url)).await?;
        Self::read_json(response).await
    }

    /// GET with an arbitrary serializable query string.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!("GET {url} (with query)");

        let response = self.send(self.client.get(url).query(query)).await?;
        Self::read_json(response).await
    }

    /// GET a paginated endpoint with `search`, `page` and `limit`.
    ///
    /// Returns the envelope itself, already checked against its invariants;
    /// a violating envelope is [`ApiClientError::MalformedResponse`].
    pub async fn get_with_params<T>(
        &self,
        path: &str,
        params: &ListParams,
    ) -> Result<Paginated<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let page: Paginated<T> = self.get_query(path, params).await?;
        page.validate()?;

        debug!(
            "{path}: page {}/{} ({} items)",
            page.pagination.current_page,
            page.pagination.last_page,
            page.data.len()
        );
        Ok(page)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url}");

        let body = self.encode_body(body)?;
        let response = self.send(self.client.post(url).json(&body)).await?;
        Self::read_json(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("PUT {url}");

        let body = self.encode_body(body)?;
        let response = self.send(self.client.put(url).json(&body)).await?;
        Self::read_json(response).await
    }

    /// DELETE; any response body is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiClientError> {
        let url = self.endpoint(path)?;
        debug!("DELETE {url}");

        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("field_case", &self.field_case)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
