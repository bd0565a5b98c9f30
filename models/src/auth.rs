use crate::error::model_error::ModelError;
use crate::ResourceId;

use common::{ErrorLocation, RedactedToken};

use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: ResourceId,
    pub username: String,
}

/// Body of `POST /login` and `POST /register`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    /// Both fields are required.
    #[track_caller]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ModelError> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Username is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if password.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Password is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { username, password })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registration form: credentials plus a password confirmation that
/// never leaves the client.
#[derive(Debug, Clone)]
pub struct Registration {
    credentials: Credentials,
}

impl Registration {
    #[track_caller]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl AsRef<str>,
    ) -> Result<Self, ModelError> {
        let credentials = Credentials::new(username, password)?;

        if confirm_password.as_ref().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Password confirmation is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if credentials.password() != confirm_password.as_ref() {
            return Err(ModelError::Validation {
                message: String::from("Passwords do not match"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { credentials })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Response of `POST /login` and `POST /register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: RedactedToken,
}
