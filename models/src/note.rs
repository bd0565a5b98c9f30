use crate::ResourceId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub category_id: Option<ResourceId>,
    #[serde(default)]
    pub category: Option<NoteCategory>,
    #[serde(default)]
    pub user_id: Option<ResourceId>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
}

/// Category preloaded on a note. Only the identifying fields; the
/// backend does not nest the category's own notes here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCategory {
    pub id: ResourceId,
    pub name: String,
}
