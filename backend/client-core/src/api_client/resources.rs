use crate::api_client::{ApiClient, ResourcePages};
use crate::error::api_client::ApiClientError;

use common::{ErrorLocation, RedactedToken};
use models::{
    AuthResponse, Category, CategoryDraft, Credentials, ListParams, Note, NoteDraft, Paginated,
    Registration, ResourceId, Task, TaskDraft,
};

use std::panic::Location;

use log::info;

pub(crate) const LOGIN_ENDPOINT: &str = "login";
pub(crate) const REGISTER_ENDPOINT: &str = "register";
pub(crate) const TASKS_ENDPOINT: &str = "tasks";
pub(crate) const NOTES_ENDPOINT: &str = "notes";
pub(crate) const CATEGORIES_ENDPOINT: &str = "categories";

impl ApiClient {
    /// `POST /login`; stores the returned token in the session.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiClientError> {
        let response: AuthResponse = self.post(LOGIN_ENDPOINT, credentials).await?;
        self.store_token(response.token).await?;
        info!("Logged in as {}", credentials.username);
        Ok(())
    }

    /// `POST /register`; the new account is logged in immediately.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiClientError> {
        let credentials = registration.credentials();
        let response: AuthResponse = self.post(REGISTER_ENDPOINT, credentials).await?;
        self.store_token(response.token).await?;
        info!("Registered and logged in as {}", credentials.username);
        Ok(())
    }

    /// Drop the stored token. No request is sent.
    pub async fn logout(&self) -> Result<(), ApiClientError> {
        self.session().clear().await?;
        Ok(())
    }

    async fn store_token(&self, token: RedactedToken) -> Result<(), ApiClientError> {
        if token.is_empty() {
            return Err(ApiClientError::MalformedResponse {
                message: String::from("Authentication response carried an empty token"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.session().set_token(&token).await?;
        Ok(())
    }

    // ---- tasks ----

    pub async fn list_tasks(&self, params: &ListParams) -> Result<Paginated<Task>, ApiClientError> {
        self.get_with_params(TASKS_ENDPOINT, params).await
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiClientError> {
        self.post(TASKS_ENDPOINT, draft).await
    }

    pub async fn update_task(&self, id: ResourceId, draft: &TaskDraft) -> Result<Task, ApiClientError> {
        self.put(&format!("{TASKS_ENDPOINT}/{id}"), draft).await
    }

    pub async fn delete_task(&self, id: ResourceId) -> Result<(), ApiClientError> {
        self.delete(&format!("{TASKS_ENDPOINT}/{id}")).await
    }

    /// Page source for a task list controller.
    pub fn task_pages(&self) -> ResourcePages<Task> {
        ResourcePages::new(self.clone(), TASKS_ENDPOINT)
    }

    // ---- notes ----

    pub async fn list_notes(&self, params: &ListParams) -> Result<Paginated<Note>, ApiClientError> {
        self.get_with_params(NOTES_ENDPOINT, params).await
    }

    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiClientError> {
        self.post(NOTES_ENDPOINT, draft).await
    }

    pub async fn update_note(&self, id: ResourceId, draft: &NoteDraft) -> Result<Note, ApiClientError> {
        self.put(&format!("{NOTES_ENDPOINT}/{id}"), draft).await
    }

    pub async fn delete_note(&self, id: ResourceId) -> Result<(), ApiClientError> {
        self.delete(&format!("{NOTES_ENDPOINT}/{id}")).await
    }

    /// Page source for a note list controller.
    pub fn note_pages(&self) -> ResourcePages<Note> {
        ResourcePages::new(self.clone(), NOTES_ENDPOINT)
    }

    // ---- categories ----

    /// Categories are few; the endpoint returns a bare array.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiClientError> {
        self.get(CATEGORIES_ENDPOINT).await
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiClientError> {
        self.post(CATEGORIES_ENDPOINT, draft).await
    }
}
