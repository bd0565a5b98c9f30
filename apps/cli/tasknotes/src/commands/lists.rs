use crate::cli::ListArgs;
use crate::error::TasknotesError;

use client_core::list_sync::{ListController, ListSnapshot, LoadOutcome};

use log::debug;

/// Load page 1 (with the search term, if any), then up to `pages - 1` more.
///
/// Stops early at the last page.
pub async fn load_pages<T>(
    list: &ListController<T>,
    args: &ListArgs,
) -> Result<ListSnapshot<T>, TasknotesError>
where
    T: Clone + Send + 'static,
{
    match &args.search {
        Some(search) => list.search(search.as_str()).await?,
        None => list.refresh().await?,
    };

    for _ in 1..args.pages {
        match list.load_more().await? {
            LoadOutcome::Appended { .. } => {}
            outcome => {
                debug!("{}: stopped paging: {outcome:?}", list.options().label);
                break;
            }
        }
    }

    let snapshot = list.snapshot().await;
    list.unmount().await;
    Ok(snapshot)
}
