use crate::ResourceId;
use crate::note::Note;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}
