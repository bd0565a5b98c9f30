//! The session: the single token value, owned explicitly.
//!
//! A `Session` is created once at startup around the platform credential
//! store and handed to the API client. Cloning shares the same store.

use crate::credential_store::{CredentialStore, TOKEN_KEY};
use crate::error::storage::StorageError;

use common::RedactedToken;

use std::sync::Arc;

use log::{debug, info, warn};

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Current token, or `None` when logged out.
    pub async fn token(&self) -> Result<Option<RedactedToken>, StorageError> {
        let token = self
            .store
            .get(TOKEN_KEY)
            .await?
            .filter(|value| !value.is_empty())
            .map(RedactedToken::new);
        Ok(token)
    }

    /// Token for an outgoing request. Storage failures count as logged out.
    pub async fn token_for_request(&self) -> Option<RedactedToken> {
        match self.token().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read session token, sending request unauthenticated: {e}");
                None
            }
        }
    }

    /// Persist a new token, replacing any previous one.
    pub async fn set_token(&self, token: &RedactedToken) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token.expose()).await?;
        info!("Session token stored ({} chars)", token.len());
        Ok(())
    }

    /// Forget the token. Succeeds when already logged out.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.delete(TOKEN_KEY).await?;
        info!("Session token cleared");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        let authenticated = self.token_for_request().await.is_some();
        debug!("Session authenticated: {authenticated}");
        authenticated
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
