use crate::helpers::{TEST_TOKEN, anonymous_client, logged_in_client};

use client_core::error::ApiClientError;

use models::{Credentials, Registration};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ----------------------------------------------------------------------------
// login / register / logout
// ----------------------------------------------------------------------------

/// **VALUE**: A successful login stores the token for every later request.
///
/// **WHY THIS MATTERS**: Login is the only way into the protected endpoints.
///
/// **BUG THIS CATCHES**: Would catch the token being returned but never persisted,
/// or the password being left out of the body.
#[tokio::test]
async fn given_valid_credentials_when_login_then_token_stored() {
    // GIVEN: A backend accepting alice's credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "username": "alice", "password": "s3cret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-abc" })))
        .expect(1)
        .mount(&server)
        .await;
    let client = anonymous_client(&server);
    let credentials = Credentials::new("alice", "s3cret").expect("valid credentials");

    // WHEN: Logging in
    client.login(&credentials).await.expect("login");

    // THEN: The session holds the token
    let token = client.session().token().await.expect("read").expect("present");
    assert_eq!(token.expose(), "jwt-abc");
}

/// **VALUE**: Rejected credentials leave the session logged out.
#[tokio::test]
async fn given_wrong_password_when_login_then_error_and_no_token() {
    let server = MockServer::start().await;
    Mock::given(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;
    let client = anonymous_client(&server);
    let credentials = Credentials::new("alice", "wrong").expect("valid credentials");

    let error = client.login(&credentials).await.expect_err("rejected");

    assert!(error.is_authorization());
    assert!(!client.session().is_authenticated().await);
}

/// **VALUE**: A response without a usable token is rejected.
///
/// **BUG THIS CATCHES**: Would catch an empty token being stored and every later
/// request going out as `Bearer `.
#[tokio::test]
async fn given_empty_token_in_response_when_login_then_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "" })))
        .mount(&server)
        .await;
    let client = anonymous_client(&server);
    let credentials = Credentials::new("alice", "s3cret").expect("valid credentials");

    let error = client.login(&credentials).await.expect_err("empty token");

    assert!(matches!(error, ApiClientError::MalformedResponse { .. }));
    assert!(!client.session().is_authenticated().await);
}

/// **VALUE**: Registration sends only username and password, then logs in.
///
/// **BUG THIS CATCHES**: Would catch the confirmation field leaking into the body.
#[tokio::test]
async fn given_registration_when_register_then_confirmation_not_sent_and_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({ "username": "bob", "password": "pw" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "Token": "jwt-new" })))
        .expect(1)
        .mount(&server)
        .await;
    let client = anonymous_client(&server);
    let registration = Registration::new("bob", "pw", "pw").expect("valid registration");

    client.register(&registration).await.expect("register");

    assert!(client.session().is_authenticated().await);
}

/// **VALUE**: Logout is local: the token is removed and no request is sent.
#[tokio::test]
async fn given_logged_in_client_when_logout_then_token_removed_without_request() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server);
    assert_eq!(
        client.session().token().await.expect("read").expect("present").expose(),
        TEST_TOKEN
    );

    client.logout().await.expect("logout");
    client.logout().await.expect("logout twice");

    assert!(!client.session().is_authenticated().await);
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}
