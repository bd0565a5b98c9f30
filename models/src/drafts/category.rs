use super::required_text;
use crate::error::model_error::ModelError;

use serde::Serialize;

/// Body of `POST /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    #[track_caller]
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = required_text("Category name", Some(name.into()))?;
        Ok(Self { name })
    }
}
