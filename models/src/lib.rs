//! Wire data structures for the tasknotes backend.
//!
//! Pure data: resources as the backend returns them, the paginated
//! envelope, list query parameters, and validated drafts for writes.
//! Field names are the canonical snake_case schema; the API client
//! normalizes PascalCase responses before they reach these types.

pub mod auth;
pub mod category;
pub mod drafts;
pub mod error;
pub mod note;
pub mod pagination;
pub mod task;

#[cfg(test)]
mod tests;

pub use auth::{AuthResponse, Credentials, Registration, User};
pub use category::Category;
pub use drafts::{CategoryDraft, NoteDraft, NoteDraftBuilder, TaskDraft, TaskDraftBuilder};
pub use error::model_error::ModelError;
pub use note::{Note, NoteCategory};
pub use pagination::{DEFAULT_PAGE_SIZE, ListParams, Paginated, Pagination};
pub use task::Task;

/// Backend primary key.
pub type ResourceId = u64;
