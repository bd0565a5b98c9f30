use crate::helpers::{TEST_TOKEN, anonymous_client, config_for, logged_in_client, tasks_page};

use client_core::config::FieldCase;
use client_core::{ApiClient, CLIENT_NAME};
use client_core::credential_store::MemoryCredentialStore;
use client_core::error::ApiClientError;
use client_core::Session;

use models::ListParams;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for ApiClient request plumbing
// These run against a wiremock server standing in for the backend
// ============================================================================

// ----------------------------------------------------------------------------
// Authorization header
// ----------------------------------------------------------------------------

/// **VALUE**: Every request from a logged-in session carries the bearer token.
///
/// **WHY THIS MATTERS**: All task and note endpoints are protected. Without the
/// header every call returns 401.
///
/// **BUG THIS CATCHES**: Would catch the interceptor being skipped on one of the
/// verbs, or a malformed `Bearer` prefix.
#[tokio::test]
async fn given_stored_token_when_requesting_then_bearer_header_sent() {
    // GIVEN: A backend that only answers authorized requests
    let server = MockServer::start().await;
    Mock::given(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(4)
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    // WHEN: Each verb is used once
    let _: Value = client.get("tasks/1").await.expect("GET");
    let _: Value = client.post("tasks", &json!({})).await.expect("POST");
    let _: Value = client.put("tasks/1", &json!({})).await.expect("PUT");
    client.delete("tasks/1").await.expect("DELETE");

    // THEN: The mock's expect(4) is verified when the server drops
}

/// **VALUE**: Without a token the request still goes out, just unauthenticated.
///
/// **BUG THIS CATCHES**: Would catch `Authorization: Bearer ` with an empty token,
/// or the request failing locally.
#[tokio::test]
async fn given_no_token_when_requesting_then_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let client = anonymous_client(&server);

    let _: Value = client.get("categories").await.expect("GET");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

/// **VALUE**: Requests identify the client and resolve against the configured base.
///
/// **BUG THIS CATCHES**: Would catch a leading `/` in an endpoint escaping the
/// base path, or the user agent being dropped from the native client.
#[tokio::test]
async fn given_base_url_with_path_when_requesting_then_joined_and_user_agent_sent() {
    // GIVEN: A base URL with a path prefix and no trailing slash
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let mut config = config_for(&server);
    config.base_url = client_core::config::parse_base_url(&format!("{}/api/v1", server.uri()))
        .expect("valid base url");
    let client = ApiClient::new(&config, Session::new(Arc::new(MemoryCredentialStore::new())))
        .expect("client");

    // WHEN: Requesting with a leading slash
    let _: Value = client.get("/tasks/7").await.expect("GET");

    // THEN: The prefix is kept and the user agent names the client
    assert_eq!(client.base_url().path(), "/api/v1/");
    let requests = server.received_requests().await.expect("recording enabled");
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        user_agent.starts_with(&format!("{CLIENT_NAME}/")),
        "unexpected user agent {user_agent}"
    );
}

// ----------------------------------------------------------------------------
// Status and body handling
// ----------------------------------------------------------------------------

/// **VALUE**: 401/403 surface as status errors the caller can recognize.
///
/// **WHY THIS MATTERS**: The client never logs out on its own; the UI decides
/// what an expired session means, so it must be able to tell.
///
/// **BUG THIS CATCHES**: Would catch 401 being swallowed or turned into a JSON error.
#[tokio::test]
async fn given_unauthorized_response_when_requesting_then_authorization_error() {
    let server = MockServer::start().await;
    Mock::given(path("/tasks/7"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    let error = client.get::<Value>("tasks/7").await.expect_err("401");

    assert!(error.is_authorization());
    assert_eq!(error.status_code().map(|s| s.0), Some(401));
    assert!(error.to_string().contains("token expired"));
    // Session is left alone
    assert!(client.session().is_authenticated().await);
}

/// **VALUE**: Server errors and unparseable bodies map to distinct variants.
#[tokio::test]
async fn given_error_responses_when_requesting_then_mapped_to_variants() {
    let server = MockServer::start().await;
    Mock::given(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(path("/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;
    let client = anonymous_client(&server);

    let server_error = client.get::<Value>("broken").await.expect_err("500");
    let garbage = client.get::<Value>("garbage").await.expect_err("bad json");

    assert!(matches!(server_error, ApiClientError::Status { .. }));
    assert!(!server_error.is_authorization());
    assert!(matches!(garbage, ApiClientError::Json { .. }));
}

/// **VALUE**: Slow responses fail with a timeout once the configured limit passes.
///
/// **BUG THIS CATCHES**: Would catch the timeout not being applied to each request.
#[tokio::test]
async fn given_slow_backend_when_requesting_then_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let mut config = config_for(&server);
    config.timeout = Duration::from_millis(200);
    let client = ApiClient::new(&config, Session::new(Arc::new(MemoryCredentialStore::new())))
        .expect("client");

    let error = client.get::<Value>("tasks").await.expect_err("timeout");

    assert!(error.is_timeout(), "expected timeout, got {error:?}");
}

// ----------------------------------------------------------------------------
// get_with_params
// ----------------------------------------------------------------------------

/// **VALUE**: Search, page and limit travel as query parameters.
///
/// **BUG THIS CATCHES**: Would catch renamed parameters or the page being sent
/// in the body.
#[tokio::test]
async fn given_list_params_when_get_with_params_then_query_string_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("search", "milk"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks_page(11, 10, 2, 3)))
        .expect(1)
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    let params = ListParams::first_page("milk", 10).with_page(2);
    let page = client
        .get_with_params::<models::Task>("tasks", &params)
        .await
        .expect("page");

    assert_eq!(page.data.len(), 10);
    assert_eq!(page.data[0].id, 11);
    assert_eq!(page.pagination.current_page, 2);
    assert!(page.pagination.has_next());
}

/// **VALUE**: Envelopes violating the pagination invariants are rejected.
///
/// **BUG THIS CATCHES**: Would catch `current_page > last_page` being accepted and
/// leaving the list controller waiting for pages that never come.
#[tokio::test]
async fn given_inconsistent_envelope_when_get_with_params_then_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks_page(1, 3, 4, 2)))
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    let error = client
        .get_with_params::<models::Task>("tasks", &ListParams::default())
        .await
        .expect_err("invalid envelope");

    assert!(matches!(error, ApiClientError::MalformedResponse { .. }));
}

// ----------------------------------------------------------------------------
// Field case
// ----------------------------------------------------------------------------

/// **VALUE**: PascalCase responses deserialize into the snake_case models.
///
/// **WHY THIS MATTERS**: Some backend builds emit Go-style field names
/// (`ID`, `DueDate`); the models must not care.
///
/// **BUG THIS CATCHES**: Would catch responses deserialized before normalization.
#[tokio::test]
async fn given_pascal_case_response_when_reading_then_models_populated() {
    let server = MockServer::start().await;
    Mock::given(path("/tasks/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ID": 3,
            "Title": "Pay rent",
            "Description": "before the 1st",
            "Completed": true,
            "UserID": 9,
            "DueDate": "2026-11-01T00:00:00Z"
        })))
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    let task: models::Task = client.get("tasks/3").await.expect("task");

    assert_eq!(task.id, 3);
    assert_eq!(task.title, "Pay rent");
    assert!(task.completed);
    assert_eq!(task.user_id, Some(9));
    assert!(task.due_date.is_some());
}

/// **VALUE**: With `field_case = pascal`, request bodies are written in PascalCase.
#[tokio::test]
async fn given_pascal_field_case_when_posting_then_body_keys_converted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(body_json(json!({ "Name": "Work" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ID": 1, "Name": "Work" })))
        .expect(1)
        .mount(&server)
        .await;
    let mut config = config_for(&server);
    config.field_case = FieldCase::Pascal;
    let client = ApiClient::new(&config, Session::new(Arc::new(MemoryCredentialStore::new())))
        .expect("client");

    let created: Value = client.post("categories", &json!({ "name": "Work" })).await.expect("POST");

    assert_eq!(created, json!({ "id": 1, "name": "Work" }));
}
