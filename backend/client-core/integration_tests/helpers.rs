//! Test helpers for integration tests against a mocked backend.
//!
//! - Resolving a [`ClientConfig`] pointed at a `wiremock` server
//! - Building an [`ApiClient`] over an in-memory credential store
//! - Canned paginated JSON bodies

use client_core::config::FileConfig;
use client_core::credential_store::{MemoryCredentialStore, TOKEN_KEY};
use client_core::{ApiClient, ClientConfig, Session};

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

/// Token used by tests that start out logged in.
pub const TEST_TOKEN: &str = "test-token-12345";

/// Configuration resolved as in production, with the file pointing at `server`.
pub fn config_for(server: &MockServer) -> ClientConfig {
    let mut file = FileConfig::default();
    file.server.base_url = Some(server.uri());
    ClientConfig::from_sources(&file, |_| None).expect("Mock server config should be valid")
}

/// Client with an empty session.
pub fn anonymous_client(server: &MockServer) -> ApiClient {
    let session = Session::new(Arc::new(MemoryCredentialStore::new()));
    ApiClient::new(&config_for(server), session).expect("Failed to build client")
}

/// Client whose session already holds [`TEST_TOKEN`].
pub fn logged_in_client(server: &MockServer) -> ApiClient {
    let store = MemoryCredentialStore::with_entry(TOKEN_KEY, TEST_TOKEN);
    let session = Session::new(Arc::new(store));
    ApiClient::new(&config_for(server), session).expect("Failed to build client")
}

/// A tasks page in the backend's snake_case envelope.
pub fn tasks_page(first_id: u64, count: u64, current_page: u32, last_page: u32) -> Value {
    let data: Vec<Value> = (first_id..first_id + count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Task {id}"),
                "description": "",
                "completed": false,
                "user_id": 1,
                "due_date": "2026-10-20T09:00:00Z"
            })
        })
        .collect();

    json!({
        "data": data,
        "pagination": {
            "total": u64::from(last_page) * 10,
            "per_page": 10,
            "current_page": current_page,
            "last_page": last_page,
            "next_page_url": null,
            "prev_page_url": null
        }
    })
}
