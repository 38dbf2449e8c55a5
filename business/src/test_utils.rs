//! Test doubles for the store.
//!
//! `StubSource` answers from a script and can be gated so a test decides
//! exactly when each fetch completes:
//!
//! ```ignore
//! let source = Arc::new(StubSource::returning(john_and_jane()).gated());
//! let mut store = PaginatedUserStore::new(source.clone());
//!
//! store.load_more();          // fetch is now parked on the gate
//! assert!(store.state().is_loading());
//!
//! source.release(1);          // let exactly one fetch through
//! store.await_pending_fetches().await;
//! ```

#![cfg(test)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::{AvatarUrls, FetchError, PageRequest, User, UserSource};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_user(id: &str, first: &str, last: &str) -> User {
    User::builder()
        .id(id)
        .first_name(first)
        .last_name(last)
        .date_of_birth("1990-01-01")
        .avatar_urls(AvatarUrls::new(
            "https://example.com/thumbnail.jpg",
            "https://example.com/medium.jpg",
            "https://example.com/large.jpg",
        ))
        .build()
}

pub fn sample_users(prefix: &str, count: usize) -> Vec<User> {
    (0..count)
        .map(|i| sample_user(&format!("{prefix}-{i}"), "User", &i.to_string()))
        .collect()
}

/// John Doe and Jane Smith, the two users every page of the default stub holds.
pub fn john_and_jane() -> Vec<User> {
    vec![
        User::builder()
            .id("john")
            .title("Mr")
            .first_name("John")
            .last_name("Doe")
            .date_of_birth("1990-01-01")
            .age(31)
            .build(),
        User::builder()
            .id("jane")
            .title("Ms")
            .first_name("Jane")
            .last_name("Smith")
            .date_of_birth("1995-02-15")
            .age(26)
            .build(),
    ]
}

#[derive(Debug)]
pub struct StubSource {
    scripted: Mutex<VecDeque<Result<Vec<User>, FetchError>>>,
    fallback: Result<Vec<User>, FetchError>,
    gate: Option<Semaphore>,
    requests: Mutex<Vec<PageRequest>>,
}

impl StubSource {
    fn with_fallback(fallback: Result<Vec<User>, FetchError>) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            fallback,
            gate: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every call answers with `users`.
    pub fn returning(users: Vec<User>) -> Self {
        Self::with_fallback(Ok(users))
    }

    /// Every call fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self::with_fallback(Err(error))
    }

    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }

    /// Queues an answer served before the fallback, in call order.
    pub fn first(self, answer: Result<Vec<User>, FetchError>) -> Self {
        self.scripted.lock().unwrap().push_back(answer);
        self
    }

    /// Parks every call until [`StubSource::release`] lets it through.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn release(&self, fetches: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(fetches);
        }
    }

    /// Requests received so far, including ones still parked on the gate.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserSource for StubSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<User>, FetchError> {
        self.requests.lock().unwrap().push(request);

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        let scripted = self.scripted.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| self.fallback.clone())
    }
}

/// A source whose fetch task dies instead of answering.
#[derive(Debug)]
pub struct PanickingSource;

#[async_trait]
impl UserSource for PanickingSource {
    async fn fetch_page(&self, _request: PageRequest) -> Result<Vec<User>, FetchError> {
        panic!("PanickingSource: fetch_page always panics");
    }
}
