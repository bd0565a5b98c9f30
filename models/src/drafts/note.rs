use super::required_text;
use crate::ResourceId;
use crate::error::model_error::ModelError;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of `POST /notes` and `PUT /notes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub category_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl NoteDraft {
    pub fn builder() -> NoteDraftBuilder {
        NoteDraftBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct NoteDraftBuilder {
    title: Option<String>,
    content: Option<String>,
    image_url: Option<String>,
    link: Option<String>,
    category_id: Option<ResourceId>,
    due_date: Option<DateTime<Utc>>,
    completed: bool,
}

impl NoteDraftBuilder {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_category_id(mut self, category_id: ResourceId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Title and content are required; everything else is optional.
    #[track_caller]
    pub fn build(self) -> Result<NoteDraft, ModelError> {
        let title = required_text("Title", self.title)?;
        let content = required_text("Content", self.content)?;

        // Blank optional inputs are sent as null, not as ""
        let image_url = self.image_url.filter(|s| !s.trim().is_empty());
        let link = self.link.filter(|s| !s.trim().is_empty());

        Ok(NoteDraft {
            title,
            content,
            image_url,
            link,
            category_id: self.category_id,
            due_date: self.due_date,
            completed: self.completed,
        })
    }
}
