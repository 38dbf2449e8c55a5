//! Building blocks for stores that own state on a single update loop.
//!
//! - [`StateRuntime`] / [`Updater`]: background work sends results back here
//! - [`Observers`] / [`Subscription`]: owners publish immutable snapshots
//! - [`TaskSet`] / [`TaskId`]: owners track the work they spawned

mod error;
mod observer;
mod runtime;
mod task;

pub use error::StateError;
pub use observer::{Observers, Subscription};
pub use runtime::{StateRuntime, Updater};
pub use task::{TaskId, TaskSet};
