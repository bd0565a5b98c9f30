//! Page-by-page list loading with search reset.
//!
//! One [`ListController`] per list screen. It owns `page`, `search`,
//! `items`, `last_page` and the in-flight marker, and implements:
//!
//! ```text
//! Idle -> Loading -> Loaded <-> LoadingMore
//!   any -> Unmounted (terminal)
//! ```
//!
//! - `refresh` / `search`: fetch page 1 and **replace** the items
//! - `load_more` / `on_scroll`: fetch `page + 1` and **append**, only when
//!   `page < last_page` and nothing is in flight
//! - a failure restores the pre-fetch state and alerts through a [`Notifier`]
//! - responses to superseded requests are dropped (last request wins)

mod controller;
mod fetcher;
mod notifier;

pub use controller::{ListController, ListOptions, ListSnapshot};
pub use fetcher::PageFetcher;
pub use notifier::{LogNotifier, Notice, Notifier};

/// Lifecycle of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing loaded yet.
    Idle,
    /// Fetching page 1.
    Loading,
    /// Showing the last successful result.
    Loaded,
    /// Fetching the next page.
    LoadingMore,
    /// Terminal; the screen is gone.
    Unmounted,
}

/// What a trigger ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Page 1 replaced the items.
    Replaced { count: usize },
    /// The next page was appended.
    Appended { count: usize },
    /// Load-more skipped: another fetch is in flight.
    InFlight,
    /// Load-more skipped: already on the last page.
    EndOfList,
    /// Load-more skipped: no initial load has completed.
    NotLoaded,
    /// Scroll position is not close enough to the end.
    NotNearEnd,
    /// Response discarded because a newer request was issued.
    Superseded,
    /// The list has been unmounted.
    Unmounted,
}
