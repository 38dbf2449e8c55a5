//! Task tracking for background work owned by a store.
//!
//! - `TaskId`: names a spawned task by kind plus a generation counter
//! - `TaskSet`: owns the spawned tasks so the owner can count and await them
//!
//! Tasks are never cancelled. A spawned task runs until its future completes
//! or the `TaskSet` itself is dropped.

use std::fmt;
use std::future::Future;

use tokio::task::JoinSet;

use crate::StateError;

/// Unique identifier for a spawned task.
///
/// The generation increases with every spawn on the same `TaskSet`, which is
/// enough to tell two fetches apart in logs.
///
/// ```ignore
/// let first = TaskId::new("fetch_page", 1);
/// let second = TaskId::new("fetch_page", 2);
///
/// assert_eq!(first.kind(), second.kind());
/// assert!(second.generation() > first.generation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    kind: &'static str,
    generation: u64,
}

impl TaskId {
    pub fn new(kind: &'static str, generation: u64) -> Self {
        Self { kind, generation }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Higher values were spawned later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.generation)
    }
}

/// Set of running background tasks.
///
/// Spawning requires an active Tokio runtime.
#[derive(Debug, Default)]
pub struct TaskSet {
    generation: u64,
    tasks: JoinSet<TaskId>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the future built by `make`, which receives the id of the task it
    /// will run under.
    pub fn spawn<F, Fut>(&mut self, kind: &'static str, make: F) -> TaskId
    where
        F: FnOnce(TaskId) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.generation += 1;
        let id = TaskId::new(kind, self.generation);
        let work = make(id);
        self.tasks.spawn(async move {
            work.await;
            id
        });
        id
    }

    /// Tasks spawned and not yet joined.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Waits for the next task to finish. `None` once the set is empty.
    pub async fn join_next(&mut self) -> Option<Result<TaskId, StateError>> {
        let joined = self.tasks.join_next().await?;
        Some(joined.map_err(|err| StateError::task_failed(err.to_string())))
    }

    /// Collects every task that has already finished, without waiting.
    pub fn reap(&mut self) -> Vec<Result<TaskId, StateError>> {
        let mut finished = Vec::new();
        while let Some(joined) = self.tasks.try_join_next() {
            finished.push(joined.map_err(|err| StateError::task_failed(err.to_string())));
        }
        finished
    }
}
