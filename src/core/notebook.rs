//! # Per-publisher record.
//!
//! A [`Notebook`] is created once per registered publisher and holds the last
//! broadcast [`Status`] plus the set of listeners observing it.
//!
//! ## Rules
//! - The publisher and every listener are held as `Weak`; the notebook never keeps them alive.
//! - Listener membership is keyed by allocation identity (attaching twice is a no-op).
//! - Dropped listeners are pruned whenever the set is snapshotted for delivery.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::listeners::{Listener, ListenerId, ListenerRef};
use crate::publishers::{Publisher, PublisherRef};
use crate::status::Status;

/// Status and listener set of one publisher.
pub(crate) struct Notebook {
    publisher: Weak<dyn Publisher>,
    status: Status,
    listeners: HashMap<ListenerId, Weak<dyn Listener>>,
}

impl Notebook {
    /// Creates a record in the [`Status::Initialized`] state with no listeners.
    pub(crate) fn new(publisher: &PublisherRef) -> Self {
        Self {
            publisher: Arc::downgrade(publisher),
            status: Status::Initialized,
            listeners: HashMap::new(),
        }
    }

    /// Returns true while something outside the registry still owns the publisher.
    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.publisher.strong_count() > 0
    }

    #[inline]
    pub(crate) fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Adds `listener`; returns `false` if it was already attached.
    pub(crate) fn attach(&mut self, listener: &ListenerRef) -> bool {
        self.listeners
            .insert(ListenerId::of(listener), Arc::downgrade(listener))
            .is_none()
    }

    /// Removes the listener with `id`; returns `true` if it was attached.
    pub(crate) fn detach(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Upgrades every attached listener, pruning the ones that were dropped.
    pub(crate) fn snapshot(&mut self) -> Vec<ListenerRef> {
        let mut live = Vec::with_capacity(self.listeners.len());
        self.listeners.retain(|_, weak| match weak.upgrade() {
            Some(l) => {
                live.push(l);
                true
            }
            None => false,
        });
        live
    }

    /// Drops entries of listeners nobody owns anymore; returns how many went.
    pub(crate) fn prune(&mut self) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|_, weak| weak.strong_count() > 0);
        before - self.listeners.len()
    }

    /// Number of attached listeners that are still alive.
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListenError;

    struct Dummy;
    impl Publisher for Dummy {}

    struct Quiet;
    impl Listener for Quiet {
        fn on_error(&self, _: &PublisherRef, _: &ListenError) {}
    }

    #[test]
    fn test_new_record_is_initialized_and_empty() {
        let p: PublisherRef = Arc::new(Dummy);
        let nb = Notebook::new(&p);
        assert_eq!(nb.status(), Status::Initialized);
        assert_eq!(nb.listener_count(), 0);
        assert!(nb.is_live());
        drop(p);
        assert!(!nb.is_live());
    }

    #[test]
    fn test_attach_is_idempotent_per_identity() {
        let p: PublisherRef = Arc::new(Dummy);
        let mut nb = Notebook::new(&p);
        let a: ListenerRef = Arc::new(Quiet);
        let b: ListenerRef = Arc::new(Quiet);

        assert!(nb.attach(&a));
        assert!(!nb.attach(&Arc::clone(&a)));
        assert!(nb.attach(&b));
        assert_eq!(nb.listener_count(), 2);

        assert!(nb.detach(ListenerId::of(&a)));
        assert!(!nb.detach(ListenerId::of(&a)));
        assert_eq!(nb.listener_count(), 1);
    }

    #[test]
    fn test_snapshot_prunes_dropped_listeners() {
        let p: PublisherRef = Arc::new(Dummy);
        let mut nb = Notebook::new(&p);
        let kept: ListenerRef = Arc::new(Quiet);
        let gone: ListenerRef = Arc::new(Quiet);
        nb.attach(&kept);
        nb.attach(&gone);
        drop(gone);

        let live = nb.snapshot();
        assert_eq!(live.len(), 1);
        assert!(Arc::ptr_eq(&live[0], &kept));
        assert_eq!(nb.prune(), 0);
    }

    #[test]
    fn test_record_does_not_own_listeners() {
        let p: PublisherRef = Arc::new(Dummy);
        let mut nb = Notebook::new(&p);
        let l: ListenerRef = Arc::new(Quiet);
        let witness = Arc::downgrade(&l);
        nb.attach(&l);
        drop(l);

        assert!(witness.upgrade().is_none());
        assert_eq!(nb.prune(), 1);
        assert!(nb.snapshot().is_empty());
    }
}
