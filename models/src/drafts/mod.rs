//! Validated request bodies for create/update calls.
//!
//! Builders run the same required-field checks as the entry forms, so a
//! draft that exists is a draft the backend will accept.

mod category;
mod note;
mod task;

pub use category::CategoryDraft;
pub use note::{NoteDraft, NoteDraftBuilder};
pub use task::{TaskDraft, TaskDraftBuilder};

use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::panic::Location;

#[track_caller]
fn required_text(field: &str, value: Option<String>) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::Validation {
        message: format!("{field} is required"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if value.trim().is_empty() {
        return Err(ModelError::Validation {
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(value)
}
