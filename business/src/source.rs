//! The boundary between the store and wherever users come from.

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::User;

/// Which slice of the remote list to fetch.
///
/// `offset` is the number of users already held; `quantity` is the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: usize,
    pub quantity: usize,
}

impl PageRequest {
    pub fn new(offset: usize, quantity: usize) -> Self {
        Self { offset, quantity }
    }

    /// 1-based page number for sources that paginate by page instead of offset.
    pub fn page_number(&self) -> usize {
        if self.quantity == 0 {
            return 1;
        }
        self.offset / self.quantity + 1
    }
}

/// Why a page could not be fetched.
///
/// The store treats every variant the same way; the distinction only shows up
/// in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("source answered with status {status}")]
    Status { status: u16 },
    #[error("failed to decode users: {0}")]
    Decode(String),
}

/// Supplies pages of users.
///
/// Implementations return between 0 and `request.quantity` users. Fewer than
/// requested means the source is exhausted, which is not an error.
#[async_trait]
pub trait UserSource: Send + Sync + Debug {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<User>, FetchError>;
}
