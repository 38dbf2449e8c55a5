//! Drives a store the way a scrolling list would.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use userlist_business::{
    BusinessConfig, PaginatedUserStore, RandomUserSource, StoreState, ViewMode,
};

/// Store over the randomuser.me source described by `config`.
pub fn build_store(config: &BusinessConfig) -> PaginatedUserStore {
    let source = Arc::new(RandomUserSource::new(config.clone()));
    PaginatedUserStore::from_config(config, source)
}

/// Loads the first page, then keeps "scrolling" to the last row until `pages`
/// fetches have been made or the list stops asking for more.
///
/// Returns how many fetches were started.
#[instrument(skip_all, name = "scroll", fields(pages = pages))]
pub async fn scroll(store: &mut PaginatedUserStore, pages: usize) -> usize {
    let mut fetches = 0;

    // The list appearing on screen is the first load.
    if pages > 0 && store.state().users().is_empty() && store.load_more() {
        fetches += 1;
        store.await_pending_fetches().await;
    }

    while fetches < pages {
        if let Some(reason) = stop_reason(store.state()) {
            debug!("Stopped scrolling: {reason}");
            break;
        }
        let Some(last) = store.state().users().last().cloned() else {
            break;
        };
        if !store.should_load_more(&last) {
            break;
        }
        if store.load_more() {
            fetches += 1;
        }
        store.await_pending_fetches().await;
    }

    info!(
        "Scrolled {fetches} page(s), {} user(s) loaded",
        store.state().users().len()
    );
    fetches
}

/// Pull-to-refresh: clears the list and loads the first page again.
#[instrument(skip_all, name = "reload")]
pub async fn reload(store: &mut PaginatedUserStore) -> Arc<StoreState> {
    store.reload();
    store.await_pending_fetches().await;
    store.snapshot()
}

/// Presses the layout button until the store shows `mode`.
pub fn switch_layout(store: &mut PaginatedUserStore, mode: ViewMode) {
    if store.state().view_mode() != mode {
        store.toggle_view_mode();
    }
}

fn stop_reason(state: &StoreState) -> Option<&'static str> {
    if state.error_message().is_some() {
        Some("last fetch failed")
    } else if state.is_exhausted() {
        Some("source exhausted")
    } else {
        None
    }
}
