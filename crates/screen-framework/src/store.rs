//! # Observable Store
//!
//! A [`Store`] holds a screen's state inside a `tokio::sync::watch` channel.
//! Every mutation goes through [`Store::update`], which notifies all
//! subscribers, so a UI layer only has to `subscribe()` and re-render on
//! `changed()`.
//!
//! Writes from background work can be made conditional on a
//! [`Ticket`](crate::Ticket) with [`Store::update_if_current`]: the write is
//! dropped when a newer piece of work has started since the ticket was issued.

use crate::generation::Ticket;
use std::sync::Arc;
use tokio::sync::watch;

/// Observable, cloneable state container.
pub struct Store<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Returns a clone of the current state.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Reads a projection of the current state without cloning all of it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Mutates the state in place and notifies subscribers.
    ///
    /// Works whether or not anyone is subscribed.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Mutates the state only while `ticket` is still the latest generation.
    ///
    /// Returns `false` (and leaves the state untouched) for a superseded ticket.
    pub fn update_if_current(&self, ticket: &Ticket, f: impl FnOnce(&mut T)) -> bool {
        let mut applied = false;
        self.tx.send_if_modified(|state| {
            if !ticket.is_current() {
                return false;
            }
            f(state);
            applied = true;
            true
        });
        applied
    }

    /// Opens a new subscription positioned at the current state.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Generation;

    #[tokio::test]
    async fn update_notifies_subscribers() {
        let store = Store::new(vec![1, 2]);
        let mut rx = store.subscribe();

        store.update(|v| v.push(3));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), vec![1, 2, 3]);
        assert_eq!(store.get(), vec![1, 2, 3]);
    }

    #[test]
    fn update_without_subscribers_still_applies() {
        let store = Store::new(0u32);
        store.update(|n| *n = 7);
        assert_eq!(store.read(|n| *n), 7);
    }

    #[test]
    fn stale_ticket_write_is_dropped() {
        let store = Store::new(String::from("initial"));
        let generation = Generation::new();

        let first = generation.begin();
        let second = generation.begin();

        assert!(!store.update_if_current(&first, |s| *s = "first".into()));
        assert!(store.update_if_current(&second, |s| *s = "second".into()));
        assert_eq!(store.get(), "second");
    }

    #[tokio::test]
    async fn dropped_write_does_not_wake_subscribers() {
        let store = Store::new(0u32);
        let generation = Generation::new();
        let stale = generation.begin();
        let _fresh = generation.begin();
        let mut rx = store.subscribe();

        store.update_if_current(&stale, |n| *n = 1);

        assert!(!rx.has_changed().unwrap());
    }
}
