use crate::{AuthResponse, Credentials, ModelError, Registration};

/// **VALUE**: Verifies that blank usernames are rejected before any request is made.
///
/// **WHY THIS MATTERS**: The login form must not hit the backend with empty fields; the
/// screen alerts locally instead.
///
/// **BUG THIS CATCHES**: Would catch if trimming is dropped and "   " passes.
#[test]
fn given_blank_username_when_creating_credentials_then_returns_validation_error() {
    let result = Credentials::new("   ", "secret");

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Username is required"),
    }
}

#[test]
fn given_empty_password_when_creating_credentials_then_returns_validation_error() {
    let result = Credentials::new("alice", "");

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Password is required"),
    }
}

/// **VALUE**: Verifies that mismatched confirmation is caught client-side.
///
/// **WHY THIS MATTERS**: The backend has no confirmation field. If the client does not
/// check it, a typo silently becomes the account password.
///
/// **BUG THIS CATCHES**: Would catch if the comparison is removed or inverted.
#[test]
fn given_mismatched_confirmation_when_registering_then_returns_validation_error() {
    let result = Registration::new("alice", "secret", "secret2");

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Passwords do not match"),
    }
}

#[test]
fn given_matching_confirmation_when_registering_then_builds_credentials() {
    let registration = Registration::new("alice", "secret", "secret").unwrap();

    assert_eq!(registration.credentials().username, "alice");
    assert_eq!(registration.credentials().password(), "secret");
}

/// **VALUE**: Verifies that Debug output of credentials hides the password.
///
/// **WHY THIS MATTERS**: Commands log the failing request context at debug level.
///
/// **BUG THIS CATCHES**: Would catch if Debug gets derived.
#[test]
fn given_credentials_when_debug_formatted_then_password_is_hidden() {
    let credentials = Credentials::new("alice", "hunter2").unwrap();

    let debug = format!("{:?}", credentials);

    assert!(debug.contains("alice"));
    assert!(!debug.contains("hunter2"));
}

/// **VALUE**: Verifies the wire body of a login request.
///
/// **WHY THIS MATTERS**: The backend expects exactly `{ username, password }`.
///
/// **BUG THIS CATCHES**: Would catch if the password field is skipped during serialization.
#[test]
fn given_credentials_when_serialized_then_body_has_username_and_password() {
    let credentials = Credentials::new("alice", "hunter2").unwrap();

    let body = serde_json::to_value(&credentials).unwrap();

    assert_eq!(body, serde_json::json!({"username": "alice", "password": "hunter2"}));
}

#[test]
fn given_token_body_when_deserialized_then_token_is_redacted() {
    let response: AuthResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();

    assert_eq!(response.token.expose(), "abc");
    assert!(!format!("{:?}", response).contains("abc"));
}
