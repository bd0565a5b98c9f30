pub mod api_client;
pub mod config;
pub mod credential_store;
pub mod error;
pub mod field_normalizer;
pub mod list_sync;
pub mod session;

#[cfg(test)]
mod tests;

pub use api_client::{ApiClient, ResourcePages};
pub use config::ClientConfig;
pub use credential_store::CredentialStore;
pub use error::CoreError;
pub use list_sync::{ListController, ListOptions, ListSnapshot, LoadOutcome, Notifier};
pub use session::Session;

pub const CLIENT_NAME: &str = "tasknotes-client";
pub const USER_AGENT: &str = const_format::concatcp!(CLIENT_NAME, "/", env!("CARGO_PKG_VERSION"));
