//! Snapshot broadcasting.
//!
//! The owner of some state publishes an immutable `Arc<T>` after every
//! mutation. Each [`Subscription`] gets its own unbounded channel, so a slow
//! renderer never blocks the owner. Dropped subscriptions are pruned on the
//! next publish.

use std::sync::Arc;

use flume::{Receiver, Sender};

#[derive(Debug)]
pub struct Observers<T> {
    subscribers: Vec<Sender<Arc<T>>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> Subscription<T> {
        let (send, recv) = flume::unbounded();
        self.subscribers.push(send);
        Subscription { recv }
    }

    /// Sends `snapshot` to every live subscriber.
    pub fn publish(&mut self, snapshot: &Arc<T>) {
        self.subscribers
            .retain(|subscriber| subscriber.send(Arc::clone(snapshot)).is_ok());
    }

    /// Number of subscribers still registered after the last publish.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

/// Receiving end handed to a renderer.
#[derive(Debug)]
pub struct Subscription<T> {
    recv: Receiver<Arc<T>>,
}

impl<T> Subscription<T> {
    /// Next queued snapshot, if any.
    pub fn try_next(&self) -> Option<Arc<T>> {
        self.recv.try_recv().ok()
    }

    /// Every queued snapshot, oldest first.
    pub fn drain(&self) -> Vec<Arc<T>> {
        self.recv.try_iter().collect()
    }
}
