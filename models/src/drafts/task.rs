use super::required_text;
use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub due_date: DateTime<Utc>,
}

impl TaskDraft {
    pub fn builder() -> TaskDraftBuilder {
        TaskDraftBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct TaskDraftBuilder {
    title: Option<String>,
    description: Option<String>,
    completed: bool,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDraftBuilder {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Title, description and due date are all required.
    #[track_caller]
    pub fn build(self) -> Result<TaskDraft, ModelError> {
        let title = required_text("Title", self.title)?;
        let description = required_text("Description", self.description)?;

        let due_date = self.due_date.ok_or_else(|| ModelError::Validation {
            message: String::from("Due date is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(TaskDraft {
            title,
            description,
            completed: self.completed,
            due_date,
        })
    }
}
