use crate::config::{ClientConfig, DEFAULT_END_THRESHOLD};
use crate::error::api_client::ApiClientError;
use crate::error::list_sync::ListSyncError;
use crate::list_sync::{ListPhase, LoadOutcome, Notice, Notifier, PageFetcher};

use common::ErrorLocation;
use models::{DEFAULT_PAGE_SIZE, ListParams, Paginated};

use std::future::Future;
use std::panic::Location;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;

/// Per-list settings.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// `limit` sent with every page request.
    pub page_size: u32,
    /// Load the next page once the last visible row is this close to the end.
    pub end_threshold: usize,
    /// Plural noun used in alerts ("notes", "tasks").
    pub label: String,
}

impl ListOptions {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            end_threshold: DEFAULT_END_THRESHOLD,
            label: label.into(),
        }
    }

    pub fn from_config(config: &ClientConfig, label: impl Into<String>) -> Self {
        Self {
            page_size: config.page_size,
            end_threshold: config.end_threshold,
            label: label.into(),
        }
    }
}

/// Point-in-time copy of a list for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub last_page: u32,
    pub search: String,
    pub phase: ListPhase,
    pub in_flight: bool,
}

impl<T> ListSnapshot<T> {
    pub fn has_more(&self) -> bool {
        self.page < self.last_page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Apply {
    Replace,
    Append,
}

/// An issued fetch, identified by its sequence number.
#[derive(Debug)]
struct PageRequest {
    seq: u64,
    page: u32,
    search: String,
    apply: Apply,
}

struct ListState<T> {
    phase: ListPhase,
    page: u32,
    last_page: u32,
    search: String,
    items: Vec<T>,
    has_loaded: bool,
    /// Sequence number of the only fetch whose response will be applied.
    in_flight: Option<u64>,
    next_seq: u64,
}

impl<T> ListState<T> {
    fn new() -> Self {
        Self {
            phase: ListPhase::Idle,
            page: 1,
            last_page: 1,
            search: String::new(),
            items: Vec::new(),
            has_loaded: false,
            in_flight: None,
            next_seq: 0,
        }
    }

    fn issue(&mut self, page: u32, search: String, apply: Apply) -> PageRequest {
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        self.phase = match apply {
            Apply::Replace => ListPhase::Loading,
            Apply::Append => ListPhase::LoadingMore,
        };

        PageRequest {
            seq: self.next_seq,
            page,
            search,
            apply,
        }
    }

    fn settled_phase(&self) -> ListPhase {
        if self.has_loaded {
            ListPhase::Loaded
        } else {
            ListPhase::Idle
        }
    }
}

/// Paginated, searchable list shared by one screen.
///
/// Cloning yields another handle to the same list. The state lock is never
/// held across a fetch.
pub struct ListController<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    notifier: Arc<dyn Notifier>,
    options: ListOptions,
    state: Arc<Mutex<ListState<T>>>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            notifier: Arc::clone(&self.notifier),
            options: self.options.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> ListController<T>
where
    T: Send + 'static,
{
    pub fn new(
        fetcher: Arc<dyn PageFetcher<T>>,
        notifier: Arc<dyn Notifier>,
        options: ListOptions,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            options,
            state: Arc::new(Mutex::new(ListState::new())),
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Reload page 1 with the current search term and replace the items.
    ///
    /// Used when the screen becomes visible, on pull-to-refresh, and after
    /// a deletion. Supersedes any fetch already in flight.
    pub async fn refresh(&self) -> Result<LoadOutcome, ListSyncError> {
        let request = {
            let mut state = self.state.lock().await;
            if state.phase == ListPhase::Unmounted {
                return Ok(LoadOutcome::Unmounted);
            }
            let search = state.search.clone();
            state.issue(1, search, Apply::Replace)
        };

        self.run(request).await
    }

    /// Submit a search term: page resets to 1 and the items are replaced.
    ///
    /// The term is committed together with the results, so a failed search
    /// leaves the previous term and items in place.
    pub async fn search(&self, text: impl Into<String>) -> Result<LoadOutcome, ListSyncError> {
        let text = text.into();
        let request = {
            let mut state = self.state.lock().await;
            if state.phase == ListPhase::Unmounted {
                return Ok(LoadOutcome::Unmounted);
            }
            state.issue(1, text, Apply::Replace)
        };

        self.run(request).await
    }

    /// Fetch and append the next page if there is one and nothing is in
    /// flight.
    pub async fn load_more(&self) -> Result<LoadOutcome, ListSyncError> {
        let request = {
            let mut state = self.state.lock().await;

            if state.phase == ListPhase::Unmounted {
                return Ok(LoadOutcome::Unmounted);
            }
            if state.in_flight.is_some() {
                debug!("{}: load-more ignored, fetch in flight", self.options.label);
                return Ok(LoadOutcome::InFlight);
            }
            if !state.has_loaded {
                return Ok(LoadOutcome::NotLoaded);
            }
            if state.page >= state.last_page {
                return Ok(LoadOutcome::EndOfList);
            }

            let next_page = state.page + 1;
            let search = state.search.clone();
            state.issue(next_page, search, Apply::Append)
        };

        self.run(request).await
    }

    /// Near-end detection for a rendered list.
    ///
    /// `last_visible_index` is the index of the last row on screen. When it
    /// is within `end_threshold` rows of the end, this behaves like
    /// [`load_more`](Self::load_more).
    pub async fn on_scroll(&self, last_visible_index: usize) -> Result<LoadOutcome, ListSyncError> {
        let near_end = {
            let state = self.state.lock().await;
            if state.phase == ListPhase::Unmounted {
                return Ok(LoadOutcome::Unmounted);
            }
            is_near_end(state.items.len(), last_visible_index, self.options.end_threshold)
        };

        if !near_end {
            return Ok(LoadOutcome::NotNearEnd);
        }

        self.load_more().await
    }

    /// Run a delete call, then resynchronize from page 1.
    ///
    /// The list is reloaded rather than spliced locally so ordering and
    /// pagination match the backend. A failed delete alerts and leaves the
    /// list untouched.
    pub async fn delete_and_resync<F>(&self, delete: F) -> Result<LoadOutcome, ListSyncError>
    where
        F: Future<Output = Result<(), ApiClientError>>,
    {
        if let Err(source) = delete.await {
            warn!("{}: delete failed: {}", self.options.label, source);
            self.notifier.notify(Notice::error(format!(
                "Failed to delete from {}.",
                self.options.label
            )));
            return Err(ListSyncError::Delete {
                location: ErrorLocation::from(Location::caller()),
                source,
            });
        }

        info!("{}: item deleted, reloading from page 1", self.options.label);
        self.refresh().await
    }

    /// Mark the list as gone. Later triggers are no-ops and late responses
    /// are dropped.
    pub async fn unmount(&self) {
        let mut state = self.state.lock().await;
        state.phase = ListPhase::Unmounted;
        state.in_flight = None;
        debug!("{}: unmounted", self.options.label);
    }

    pub async fn phase(&self) -> ListPhase {
        self.state.lock().await.phase
    }

    async fn run(&self, request: PageRequest) -> Result<LoadOutcome, ListSyncError> {
        let params = ListParams {
            search: request.search.clone(),
            page: request.page,
            limit: self.options.page_size,
        };

        debug!(
            "{}: fetching page {} (search '{}', request #{})",
            self.options.label, params.page, params.search, request.seq
        );

        let result = self.fetcher.fetch_page(&params).await;

        let mut state = self.state.lock().await;

        if state.phase == ListPhase::Unmounted {
            debug!("{}: response after unmount dropped", self.options.label);
            return Ok(LoadOutcome::Unmounted);
        }

        if state.in_flight != Some(request.seq) {
            debug!(
                "{}: response to superseded request #{} dropped",
                self.options.label, request.seq
            );
            return Ok(LoadOutcome::Superseded);
        }

        state.in_flight = None;

        match result {
            Ok(page) => Ok(Self::apply(&mut state, request, page)),
            Err(source) => {
                state.phase = state.settled_phase();
                drop(state);

                warn!(
                    "{}: failed to load page {}: {}",
                    self.options.label, request.page, source
                );
                self.notifier.notify(Notice::error(format!(
                    "Failed to load {}.",
                    self.options.label
                )));

                Err(ListSyncError::Fetch {
                    page: request.page,
                    location: ErrorLocation::from(Location::caller()),
                    source,
                })
            }
        }
    }

    fn apply(state: &mut ListState<T>, request: PageRequest, page: Paginated<T>) -> LoadOutcome {
        let count = page.data.len();
        state.last_page = page.pagination.effective_last_page();
        state.page = request.page;
        state.has_loaded = true;
        state.phase = ListPhase::Loaded;

        match request.apply {
            Apply::Replace => {
                state.search = request.search;
                state.items = page.data;
                LoadOutcome::Replaced { count }
            }
            Apply::Append => {
                state.items.extend(page.data);
                LoadOutcome::Appended { count }
            }
        }
    }
}

impl<T> ListController<T>
where
    T: Clone + Send + 'static,
{
    pub async fn snapshot(&self) -> ListSnapshot<T> {
        let state = self.state.lock().await;
        ListSnapshot {
            items: state.items.clone(),
            page: state.page,
            last_page: state.last_page,
            search: state.search.clone(),
            phase: state.phase,
            in_flight: state.in_flight.is_some(),
        }
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.lock().await.items.clone()
    }
}

/// True when the last visible row is within `threshold` rows of the end.
pub(crate) fn is_near_end(len: usize, last_visible_index: usize, threshold: usize) -> bool {
    if len == 0 {
        return false;
    }
    let last_index = len - 1;
    last_visible_index.saturating_add(threshold) >= last_index
}
