//! # Generation Guard
//!
//! When the same piece of work can be restarted before the previous run has
//! finished (e.g. navigating to another category while the first one is still
//! loading), results from the older run must not overwrite newer state.
//!
//! [`Generation::begin`] issues a [`Ticket`]; the ticket stays current until
//! the next `begin`. Work checks [`Ticket::is_current`] before each write, or
//! writes through [`Store::update_if_current`](crate::Store::update_if_current).
//! In-flight requests are not cancelled; their results are simply discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic counter shared by all tickets it issues.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    current: Arc<AtomicU64>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, superseding every ticket issued before.
    pub fn begin(&self) -> Ticket {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            current: Arc::clone(&self.current),
        }
    }

    /// The id of the latest generation (0 before the first `begin`).
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

/// Proof that a piece of work belongs to a particular generation.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_supersedes_previous_tickets() {
        let generation = Generation::new();
        assert_eq!(generation.current(), 0);

        let a = generation.begin();
        assert!(a.is_current());
        assert_eq!(a.id(), 1);

        let b = generation.begin();
        assert!(!a.is_current());
        assert!(b.is_current());
        assert_eq!(generation.current(), 2);
    }

    #[test]
    fn cloned_generation_shares_the_counter() {
        let generation = Generation::new();
        let ticket = generation.begin();

        let other = generation.clone();
        other.begin();

        assert!(!ticket.is_current());
    }
}
