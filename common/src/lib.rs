//! Shared primitives for the tasknotes workspace.
//!
//! Everything here is used by more than one crate:
//!
//! - **ErrorLocation**: file/line/column captured with `#[track_caller]`
//!   and embedded in every error variant across the workspace
//! - **HttpStatusCode**: status codes stored as data, not parsed from messages
//! - **RedactedToken**: the session token, safe to pass to `Debug`
//!
//! ## Architecture
//!
//! - **common** (this crate): cross-cutting primitives
//! - **models**: wire data structures
//! - **client-core**: credential storage, session, API client, list sync
//! - **tasknotes**: command line front end wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
