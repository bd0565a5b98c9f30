// Unit tests for the session token wrapper

use crate::credential_store::{CredentialStore, MemoryCredentialStore, TOKEN_KEY};
use crate::error::storage::StorageError;
use crate::session::Session;

use common::{ErrorLocation, RedactedToken};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;

/// Store whose every call fails, standing in for a broken disk or a blocked
/// localStorage.
struct FailingStore;

#[async_trait]
impl CredentialStore for FailingStore {
    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(unavailable())
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(unavailable())
    }

    async fn delete(&self, _key: &str) -> Result<(), StorageError> {
        Err(unavailable())
    }
}

fn unavailable() -> StorageError {
    StorageError::Unavailable {
        message: "store offline".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// **VALUE**: Login then logout moves the session between its two states.
///
/// **BUG THIS CATCHES**: Would catch `clear` deleting a different key than the one
/// `set_token` writes.
#[tokio::test]
async fn given_token_set_when_cleared_then_session_unauthenticated() {
    // GIVEN: A fresh session
    let session = Session::new(Arc::new(MemoryCredentialStore::new()));
    assert!(!session.is_authenticated().await);

    // WHEN: A token is stored
    session
        .set_token(&RedactedToken::new("jwt-value"))
        .await
        .expect("set");

    // THEN: It is returned and the session is authenticated
    let token = session.token().await.expect("read").expect("present");
    assert_eq!(token.expose(), "jwt-value");
    assert!(session.is_authenticated().await);

    // WHEN: Cleared (twice, to check idempotence)
    session.clear().await.expect("clear");
    session.clear().await.expect("clear again");

    // THEN: Logged out
    assert!(session.token().await.expect("read").is_none());
    assert!(!session.is_authenticated().await);
}

/// **VALUE**: An empty stored token counts as logged out.
///
/// **BUG THIS CATCHES**: Would catch `Authorization: Bearer ` being sent with an
/// empty credential.
#[tokio::test]
async fn given_empty_stored_token_when_reading_then_none() {
    let session = Session::new(Arc::new(MemoryCredentialStore::with_entry(TOKEN_KEY, "")));

    assert!(session.token().await.expect("read").is_none());
    assert!(session.token_for_request().await.is_none());
}

/// **VALUE**: A storage failure is an error for explicit reads but only means
/// "unauthenticated" for outgoing requests.
///
/// **WHY THIS MATTERS**: Requests must still go out (and get a 401) rather than
/// failing locally when the store is temporarily unreadable.
///
/// **BUG THIS CATCHES**: Would catch the request path propagating storage errors.
#[tokio::test]
async fn given_failing_store_when_reading_then_error_or_unauthenticated() {
    let session = Session::new(Arc::new(FailingStore));

    assert!(matches!(
        session.token().await,
        Err(StorageError::Unavailable { .. })
    ));
    assert!(session.token_for_request().await.is_none());
    assert!(session.set_token(&RedactedToken::new("x")).await.is_err());
}

/// **VALUE**: Debug output never includes the token.
#[tokio::test]
async fn given_authenticated_session_when_debug_formatted_then_no_token() {
    let session = Session::new(Arc::new(MemoryCredentialStore::with_entry(
        TOKEN_KEY,
        "super-secret",
    )));

    let debug = format!("{session:?}");

    assert!(!debug.contains("super-secret"));
}
