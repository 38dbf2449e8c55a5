//! Paginated user store.
//!
//! `PaginatedUserStore` is the single owner of [`StoreState`]. Renderers read a
//! snapshot, subscribe to changes and call the commands:
//! - `load_more()`: fetch the next page unless one is already in flight
//! - `reload()`: drop everything and fetch the first page again
//! - `set_view_mode()` / `toggle_view_mode()`: switch between list and grid
//!
//! Fetches run as Tokio tasks. A finished fetch does not touch the state by
//! itself; it sends its outcome over the store's update runtime and the owner
//! applies it from its own loop via [`PaginatedUserStore::sync`] or
//! [`PaginatedUserStore::await_pending_fetches`]. Every mutation publishes one
//! immutable snapshot, so observers never see a half-applied page.

use std::collections::HashSet;
use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use ustr::Ustr;
use userlist_states::{Observers, StateRuntime, Subscription, TaskId, TaskSet};

use crate::{BusinessConfig, FetchError, PageRequest, User, UserSource};

/// Users requested per page unless configured otherwise.
pub const PAGE_SIZE: usize = 20;

/// The only error text a renderer ever shows.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users. Please try again later.";

/// How the renderer lays users out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }
}

/// Everything a renderer needs to draw the user list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreState {
    users: Vec<User>,
    is_loading: bool,
    view_mode: ViewMode,
    error_message: Option<String>,
    is_exhausted: bool,
    last_loaded_at: Option<DateTime<Utc>>,
    /// Users received since the last reset, including ones dropped as
    /// duplicates. The next page starts here.
    #[serde(skip)]
    received: usize,
}

impl StoreState {
    /// Users in page-arrival order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// True exactly while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The last successful page came back short.
    pub fn is_exhausted(&self) -> bool {
        self.is_exhausted
    }

    pub fn last_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.last_loaded_at
    }

    /// Scroll trigger: true when nothing is loading and `item` is the last user.
    ///
    /// Only compares against the tail, so it is cheap enough to run on every
    /// visible-item event.
    pub fn should_load_more(&self, item: &User) -> bool {
        !self.is_loading
            && self
                .users
                .last()
                .is_some_and(|last| last.id() == item.id())
    }

    fn reset_users(&mut self) {
        self.users.clear();
        self.is_exhausted = false;
        self.received = 0;
    }
}

/// What a failed fetch does to the users already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Drop every loaded user, not only the failed page.
    #[default]
    ClearUsers,
    /// Keep loaded pages and only surface the error.
    KeepUsers,
}

impl FailurePolicy {
    fn apply(self, state: &mut StoreState) {
        match self {
            Self::ClearUsers => state.reset_users(),
            Self::KeepUsers => {}
        }
    }
}

/// How a fetched page joins the loaded users.
///
/// Duplicate ids inside one page are always dropped (first one wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppendStrategy {
    /// Trust the source not to repeat users across pages.
    #[default]
    Trusting,
    /// Also drop users whose id is already loaded from an earlier page.
    DedupById,
}

impl AppendStrategy {
    /// Appends `batch` in order and returns how many users were kept.
    fn append(self, users: &mut Vec<User>, batch: Vec<User>) -> usize {
        let mut seen: HashSet<Ustr> = match self {
            Self::Trusting => HashSet::with_capacity(batch.len()),
            Self::DedupById => users.iter().map(User::id).collect(),
        };

        let before = users.len();
        for user in batch {
            if seen.insert(user.id()) {
                users.push(user);
            } else {
                warn!("AppendStrategy: dropping duplicate user {}", user.id());
            }
        }
        users.len() - before
    }
}

/// Result of one fetch, sent back from the task to the owner.
#[derive(Debug)]
struct FetchOutcome {
    task: TaskId,
    request: PageRequest,
    result: Result<Vec<User>, FetchError>,
}

#[derive(Debug)]
pub struct PaginatedUserStore {
    state: Arc<StoreState>,
    source: Arc<dyn UserSource>,
    page_size: usize,
    failure_policy: FailurePolicy,
    append_strategy: AppendStrategy,
    runtime: StateRuntime<FetchOutcome>,
    observers: Observers<StoreState>,
    tasks: TaskSet,
}

impl PaginatedUserStore {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self {
            state: Arc::new(StoreState::default()),
            source,
            page_size: PAGE_SIZE,
            failure_policy: FailurePolicy::default(),
            append_strategy: AppendStrategy::default(),
            runtime: StateRuntime::new(),
            observers: Observers::new(),
            tasks: TaskSet::new(),
        }
    }

    pub fn from_config(config: &BusinessConfig, source: Arc<dyn UserSource>) -> Self {
        Self::new(source).with_page_size(config.page_size())
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size == 0 {
            warn!("PaginatedUserStore: page size 0 requested, using 1");
        }
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_append_strategy(mut self, strategy: AppendStrategy) -> Self {
        self.append_strategy = strategy;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Shared handle to the current state; later mutations do not affect it.
    pub fn snapshot(&self) -> Arc<StoreState> {
        Arc::clone(&self.state)
    }

    /// Receives one snapshot per mutation from now on.
    pub fn subscribe(&mut self) -> Subscription<StoreState> {
        self.observers.subscribe()
    }

    /// Fetches spawned and not yet joined.
    pub fn fetches_in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn should_load_more(&self, item: &User) -> bool {
        self.state.should_load_more(item)
    }

    /// Starts fetching the next page.
    ///
    /// Returns `false` without touching anything when a fetch is already in
    /// flight. Must be called inside a Tokio runtime.
    pub fn load_more(&mut self) -> bool {
        self.begin_fetch(false)
    }

    /// Clears the loaded users and fetches the first page again.
    ///
    /// The clear always happens. The fetch obeys the same single-flight gate as
    /// `load_more`; an in-flight fetch is not cancelled and its page lands on
    /// top of the cleared list.
    pub fn reload(&mut self) -> bool {
        self.begin_fetch(true)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.state.view_mode == mode {
            return;
        }
        self.update(|state| state.view_mode = mode);
    }

    pub fn toggle_view_mode(&mut self) {
        let mode = self.state.view_mode.toggled();
        self.set_view_mode(mode);
    }

    /// Applies every fetch outcome that has arrived, without waiting.
    ///
    /// Call this from the update loop. Returns how many outcomes were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = self.apply_arrived();

        for joined in self.tasks.reap() {
            if let Err(err) = joined {
                self.fail_fetch(&"fetch task", &err);
                applied += 1;
            }
        }
        applied
    }

    /// Waits for every in-flight fetch and applies each outcome as it lands.
    pub async fn await_pending_fetches(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(err) = joined {
                self.fail_fetch(&"fetch task", &err);
            }
            self.apply_arrived();
        }
        self.apply_arrived();
    }

    fn begin_fetch(&mut self, reset: bool) -> bool {
        if self.state.is_loading {
            if reset {
                debug!("PaginatedUserStore: reload while fetching, clearing users only");
                self.update(StoreState::reset_users);
            } else {
                debug!("PaginatedUserStore: fetch already in flight, ignoring load_more");
            }
            return false;
        }

        // Close the gate before anything asynchronous is dispatched.
        self.update(|state| {
            if reset {
                state.reset_users();
            }
            state.is_loading = true;
            state.error_message = None;
        });

        let request = PageRequest::new(self.state.received, self.page_size);
        let source = Arc::clone(&self.source);
        let updater = self.runtime.updater();
        let task = self.tasks.spawn("fetch_page", move |task| async move {
            let result = source.fetch_page(request).await;
            updater.set(FetchOutcome {
                task,
                request,
                result,
            });
        });

        info!(
            "{task}: fetching {} users at offset {}",
            request.quantity, request.offset
        );
        true
    }

    fn apply_arrived(&mut self) -> usize {
        let arrived: Vec<FetchOutcome> = self.runtime.drain().collect();
        let count = arrived.len();
        for outcome in arrived {
            self.apply(outcome);
        }
        count
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        let FetchOutcome {
            task,
            request,
            result,
        } = outcome;

        match result {
            Ok(batch) => {
                let received = batch.len();
                let exhausted = received < request.quantity;
                let strategy = self.append_strategy;
                let now = Utc::now();
                let mut kept = 0;

                self.update(|state| {
                    kept = strategy.append(&mut state.users, batch);
                    state.received += received;
                    state.is_loading = false;
                    state.is_exhausted = exhausted;
                    state.last_loaded_at = Some(now);
                });

                info!(
                    "{task}: loaded {kept} of {received} users, {} total",
                    self.state.users.len()
                );
                if exhausted {
                    debug!("{task}: source exhausted ({received} < {})", request.quantity);
                }
            }
            Err(err) => self.fail_fetch(&task, &err),
        }
    }

    fn fail_fetch(&mut self, context: &dyn Display, reason: &dyn Display) {
        // The raw reason is for logs only; renderers get the fixed message.
        error!("{context}: failed to load users: {reason}");

        let policy = self.failure_policy;
        self.update(|state| {
            policy.apply(state);
            state.error_message = Some(LOAD_FAILED_MESSAGE.to_owned());
            state.is_loading = false;
        });
    }

    /// The only place state changes; publishes the result as one snapshot.
    fn update(&mut self, mutate: impl FnOnce(&mut StoreState)) {
        mutate(Arc::make_mut(&mut self.state));
        self.observers.publish(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        PanickingSource, StubSource, init_logger, john_and_jane, sample_user, sample_users,
    };

    fn store_with(source: &Arc<StubSource>) -> PaginatedUserStore {
        init_logger();
        PaginatedUserStore::new(Arc::clone(source) as Arc<dyn UserSource>)
    }

    #[test]
    fn new_store_starts_empty_in_list_mode() {
        let store = store_with(&Arc::new(StubSource::empty()));
        let state = store.state();

        assert!(state.users().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.view_mode(), ViewMode::List);
        assert!(state.error_message().is_none());
        assert!(!state.is_exhausted());
        assert_eq!(store.page_size(), PAGE_SIZE);
    }

    #[tokio::test]
    async fn load_more_appends_fetched_users() {
        let source = Arc::new(StubSource::returning(john_and_jane()));
        let mut store = store_with(&source);

        assert!(store.load_more());
        assert!(store.state().is_loading());

        store.await_pending_fetches().await;

        let state = store.state();
        assert_eq!(state.users().len(), 2);
        assert!(!state.is_loading());
        assert!(state.error_message().is_none());
        assert_eq!(state.users()[0].first_name(), "John");
        assert_eq!(state.users()[1].last_name(), "Smith");
        assert!(state.last_loaded_at().is_some());
    }

    #[tokio::test]
    async fn failed_fetch_clears_users_and_sets_fixed_message() {
        let source = Arc::new(StubSource::failing(FetchError::Status { status: 500 }));
        let mut store = store_with(&source);

        store.load_more();
        store.await_pending_fetches().await;

        let state = store.state();
        assert!(state.users().is_empty());
        assert!(!state.is_loading());
        assert_eq!(
            state.error_message(),
            Some("Failed to load users. Please try again later.")
        );
    }

    #[tokio::test]
    async fn empty_page_is_not_an_error() {
        let source = Arc::new(StubSource::empty());
        let mut store = store_with(&source);

        store.load_more();
        store.await_pending_fetches().await;

        let state = store.state();
        assert!(state.users().is_empty());
        assert!(!state.is_loading());
        assert!(state.error_message().is_none());
        assert!(state.is_exhausted());
    }

    #[tokio::test]
    async fn second_load_more_while_loading_is_a_no_op() {
        let source = Arc::new(StubSource::returning(john_and_jane()).gated());
        let mut store = store_with(&source);
        let subscription = store.subscribe();

        assert!(store.load_more());
        let before = store.snapshot();
        subscription.drain();

        assert!(!store.load_more());
        assert!(subscription.try_next().is_none(), "no snapshot published");
        assert!(Arc::ptr_eq(&before, &store.snapshot()), "state untouched");
        assert_eq!(store.fetches_in_flight(), 1);

        source.release(1);
        store.await_pending_fetches().await;

        assert_eq!(source.requests().len(), 1);
        assert_eq!(store.state().users().len(), 2);
        assert!(!store.state().is_loading());
    }

    #[tokio::test]
    async fn reload_clears_immediately_then_fetches_first_page() {
        let source = Arc::new(StubSource::returning(john_and_jane()));
        let mut store = store_with(&source);

        store.load_more();
        store.await_pending_fetches().await;
        assert_eq!(store.state().users().len(), 2);

        assert!(store.reload());
        assert!(store.state().users().is_empty());
        assert!(store.state().is_loading());

        store.await_pending_fetches().await;
        assert_eq!(store.state().users().len(), 2);
        assert!(!store.state().is_loading());

        let requests = source.requests();
        assert_eq!(requests[0].offset, 0);
        assert_eq!(requests[1].offset, 0, "reload starts from the top");
    }

    #[tokio::test]
    async fn reload_publishes_clear_and_loading_together() {
        let source = Arc::new(StubSource::returning(john_and_jane()));
        let mut store = store_with(&source);
        store.load_more();
        store.await_pending_fetches().await;

        let subscription = store.subscribe();
        store.reload();

        let published = subscription.drain();
        assert_eq!(published.len(), 1);
        assert!(published[0].users().is_empty());
        assert!(published[0].is_loading());
    }

    #[tokio::test]
    async fn reload_during_fetch_clears_but_does_not_start_another() {
        let source = Arc::new(StubSource::returning(john_and_jane()).gated());
        let mut store = store_with(&source);

        store.load_more();
        source.release(1);
        store.await_pending_fetches().await;
        assert_eq!(store.state().users().len(), 2);

        store.load_more();
        assert!(!store.reload());
        assert!(store.state().users().is_empty());
        assert!(store.state().is_loading());

        // The fetch that was already running lands on the cleared list.
        source.release(1);
        store.await_pending_fetches().await;
        assert_eq!(source.requests().len(), 2);
        assert_eq!(store.state().users().len(), 2);
        assert!(!store.state().is_loading());
    }

    #[tokio::test]
    async fn next_page_starts_after_loaded_users() {
        let source = Arc::new(StubSource::returning(sample_users("p", 3)));
        let mut store = store_with(&source).with_page_size(3);

        store.load_more();
        store.await_pending_fetches().await;
        let last = store.state().users().last().cloned().unwrap();
        assert!(store.should_load_more(&last));

        store.load_more();
        store.await_pending_fetches().await;

        let requests = source.requests();
        assert_eq!(requests[0], PageRequest::new(0, 3));
        assert_eq!(requests[1], PageRequest::new(3, 3));
        assert_eq!(store.state().users().len(), 6);
        assert!(!store.state().is_exhausted());
    }

    #[tokio::test]
    async fn next_offset_counts_dropped_duplicates() {
        let batch = vec![
            sample_user("a", "Ann", "One"),
            sample_user("a", "Ann", "Again"),
            sample_user("b", "Bob", "Two"),
        ];
        let source = Arc::new(StubSource::returning(batch));
        let mut store = store_with(&source).with_page_size(3);

        store.load_more();
        store.await_pending_fetches().await;
        assert_eq!(store.state().users().len(), 2);

        store.load_more();
        store.await_pending_fetches().await;

        let requests = source.requests();
        assert_eq!(requests[1], PageRequest::new(3, 3));
        assert_eq!(requests[1].page_number(), 2, "second scroll asks for page 2");

        store.reload();
        store.await_pending_fetches().await;
        assert_eq!(source.requests()[2], PageRequest::new(0, 3));
    }

    #[tokio::test]
    async fn wipe_restarts_paging_from_first_page() {
        let source = Arc::new(
            StubSource::returning(sample_users("p", 2))
                .first(Ok(sample_users("p", 2)))
                .first(Err(FetchError::Status { status: 500 })),
        );
        let mut store = store_with(&source).with_page_size(2);

        for _ in 0..3 {
            store.load_more();
            store.await_pending_fetches().await;
        }

        let requests = source.requests();
        assert_eq!(requests[1], PageRequest::new(2, 2));
        assert_eq!(requests[2], PageRequest::new(0, 2), "wiped list starts over");
        assert_eq!(store.state().users().len(), 2);
    }

    #[tokio::test]
    async fn should_load_more_only_for_last_user_when_idle() {
        let source = Arc::new(StubSource::returning(john_and_jane()).gated());
        let mut store = store_with(&source);
        let stranger = sample_user("nobody", "No", "Body");

        assert!(!store.should_load_more(&stranger), "empty list");

        store.load_more();
        source.release(1);
        store.await_pending_fetches().await;

        let users = store.state().users().to_vec();
        assert!(store.should_load_more(&users[1]));
        assert!(!store.should_load_more(&users[0]));
        assert!(!store.should_load_more(&stranger));

        store.load_more();
        assert!(!store.should_load_more(&users[1]), "fetch in flight");

        source.release(1);
        store.await_pending_fetches().await;
    }

    #[tokio::test]
    async fn set_view_mode_leaves_fetch_state_alone() {
        let source = Arc::new(StubSource::failing(FetchError::Decode("bad".to_owned())));
        let mut store = store_with(&source);
        store.load_more();
        store.await_pending_fetches().await;
        let before = store.snapshot();

        store.set_view_mode(ViewMode::Grid);

        let after = store.state();
        assert_eq!(after.view_mode(), ViewMode::Grid);
        assert_eq!(after.users(), before.users());
        assert_eq!(after.is_loading(), before.is_loading());
        assert_eq!(after.error_message(), before.error_message());

        store.toggle_view_mode();
        assert_eq!(store.state().view_mode(), ViewMode::List);
        assert_eq!(source.requests().len(), 1, "no fetch triggered");
    }

    #[tokio::test]
    async fn error_is_cleared_when_next_fetch_starts() {
        let source = Arc::new(
            StubSource::returning(john_and_jane())
                .first(Err(FetchError::Transport("offline".to_owned()))),
        );
        let mut store = store_with(&source);

        store.load_more();
        store.await_pending_fetches().await;
        assert!(store.state().error_message().is_some());

        store.load_more();
        assert!(store.state().error_message().is_none());

        store.await_pending_fetches().await;
        assert!(store.state().error_message().is_none());
        assert_eq!(store.state().users().len(), 2);
    }

    #[tokio::test]
    async fn failure_after_success_wipes_loaded_pages() {
        let source = Arc::new(
            StubSource::failing(FetchError::Status { status: 502 }).first(Ok(john_and_jane())),
        );
        let mut store = store_with(&source);

        store.load_more();
        store.await_pending_fetches().await;
        assert_eq!(store.state().users().len(), 2);

        store.load_more();
        store.await_pending_fetches().await;
        assert!(store.state().users().is_empty());
        assert_eq!(store.state().error_message(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn keep_users_policy_only_surfaces_the_error() {
        let source = Arc::new(
            StubSource::failing(FetchError::Status { status: 502 }).first(Ok(john_and_jane())),
        );
        let mut store = store_with(&source).with_failure_policy(FailurePolicy::KeepUsers);

        store.load_more();
        store.await_pending_fetches().await;
        store.load_more();
        store.await_pending_fetches().await;

        assert_eq!(store.state().users().len(), 2);
        assert_eq!(store.state().error_message(), Some(LOAD_FAILED_MESSAGE));
        assert!(!store.state().is_loading());
    }

    #[tokio::test]
    async fn duplicate_ids_within_one_page_are_dropped() {
        let batch = vec![
            sample_user("a", "Ann", "One"),
            sample_user("a", "Ann", "Again"),
            sample_user("b", "Bob", "Two"),
        ];
        let source = Arc::new(StubSource::returning(batch));
        let mut store = store_with(&source);

        store.load_more();
        store.await_pending_fetches().await;

        let users = store.state().users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].last_name(), "One");
    }

    #[tokio::test]
    async fn cross_page_duplicates_depend_on_append_strategy() {
        let trusting_source = Arc::new(StubSource::returning(john_and_jane()));
        let mut trusting = store_with(&trusting_source);
        let dedup_source = Arc::new(StubSource::returning(john_and_jane()));
        let mut dedup = store_with(&dedup_source).with_append_strategy(AppendStrategy::DedupById);

        for store in [&mut trusting, &mut dedup] {
            store.load_more();
            store.await_pending_fetches().await;
            store.load_more();
            store.await_pending_fetches().await;
        }

        assert_eq!(trusting.state().users().len(), 4);
        assert_eq!(dedup.state().users().len(), 2);
    }

    #[tokio::test]
    async fn observers_see_one_snapshot_per_transition() {
        let source = Arc::new(StubSource::returning(john_and_jane()));
        let mut store = store_with(&source);
        let subscription = store.subscribe();

        store.load_more();
        store.await_pending_fetches().await;

        let published = subscription.drain();
        assert_eq!(published.len(), 2);
        assert!(published[0].is_loading());
        assert!(published[0].users().is_empty());
        assert!(!published[1].is_loading());
        assert_eq!(published[1].users().len(), 2);
        assert!(
            published
                .iter()
                .all(|state| state.is_loading() || state.users().len() == 2),
            "never idle with a stale list"
        );
    }

    #[tokio::test]
    async fn sync_applies_outcome_from_update_loop() {
        let source = Arc::new(StubSource::returning(john_and_jane()));
        let mut store = store_with(&source);

        store.load_more();
        assert_eq!(store.sync(), 0, "fetch has not run yet");

        let mut applied = 0;
        while applied == 0 {
            tokio::task::yield_now().await;
            applied = store.sync();
        }

        assert_eq!(applied, 1);
        assert_eq!(store.state().users().len(), 2);
        assert!(!store.state().is_loading());
    }

    #[tokio::test]
    async fn panicking_source_is_treated_as_failure() {
        init_logger();
        let mut store = PaginatedUserStore::new(Arc::new(PanickingSource));

        store.load_more();
        store.await_pending_fetches().await;

        assert!(!store.state().is_loading());
        assert_eq!(store.state().error_message(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn full_page_is_not_exhausted() {
        let source = Arc::new(StubSource::returning(sample_users("full", PAGE_SIZE)));
        let mut store = store_with(&source);

        store.load_more();
        store.await_pending_fetches().await;

        assert_eq!(store.state().users().len(), PAGE_SIZE);
        assert!(!store.state().is_exhausted());
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let store = store_with(&Arc::new(StubSource::empty())).with_page_size(0);
        assert_eq!(store.page_size(), 1);
    }

    #[test]
    fn view_mode_toggles_between_list_and_grid() {
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::default(), ViewMode::List);
    }
}
