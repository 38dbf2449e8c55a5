//! Serialized update channel.
//!
//! Background work never touches owned state directly. It holds an [`Updater`]
//! and sends its result back; the owner drains the [`StateRuntime`] from its
//! own update loop and applies each message in arrival order.

use flume::{Receiver, Sender};
use log::warn;

#[derive(Debug)]
pub struct StateRuntime<M> {
    send: Sender<M>,
    recv: Receiver<M>,
}

impl<M> Default for StateRuntime<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> StateRuntime<M> {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    /// Hands out a sender for background work.
    pub fn updater(&self) -> Updater<M> {
        Updater {
            send: self.send.clone(),
        }
    }

    /// Takes every update that has already arrived, without waiting.
    pub fn drain(&self) -> impl Iterator<Item = M> + '_ {
        self.recv.try_iter()
    }
}

/// Sending half of a [`StateRuntime`].
///
/// Cheap to clone and `Send`, so it can move into spawned tasks.
#[derive(Debug)]
pub struct Updater<M> {
    send: Sender<M>,
}

impl<M> Clone for Updater<M> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
        }
    }
}

impl<M> Updater<M> {
    /// Queues an update for the owner.
    ///
    /// Returns `false` when the owner is gone; the update is dropped.
    pub fn set(&self, update: M) -> bool {
        if self.send.send(update).is_err() {
            warn!("Updater::set: runtime dropped, discarding update");
            return false;
        }
        true
    }
}
