//! Paginated envelope and list query parameters.
//!
//! Invariants checked by [`Paginated::validate`]:
//! - `current_page <= last_page`
//! - `data.len() <= per_page`

use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Page size used when neither config nor caller chooses one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub per_page: u32,
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub prev_page_url: Option<String>,
}

impl Pagination {
    /// `last_page` with an empty result set counted as one (empty) page.
    pub fn effective_last_page(&self) -> u32 {
        self.last_page.max(1)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.effective_last_page()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        let pagination = &self.pagination;

        if pagination.current_page > pagination.effective_last_page() {
            return Err(ModelError::Validation {
                message: format!(
                    "current_page {} exceeds last_page {}",
                    pagination.current_page, pagination.last_page
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.data.len() > pagination.per_page as usize {
            return Err(ModelError::Validation {
                message: format!(
                    "page holds {} items but per_page is {}",
                    self.data.len(),
                    pagination.per_page
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

/// Query string for paginated list endpoints: `?search=..&page=..&limit=..`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListParams {
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl ListParams {
    pub fn first_page(search: impl Into<String>, limit: u32) -> Self {
        Self {
            search: search.into(),
            page: 1,
            limit,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::first_page("", DEFAULT_PAGE_SIZE)
    }
}
