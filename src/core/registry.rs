//! # Registry - publisher/listener bookkeeping and synchronous fan-out.
//!
//! The registry maps every registered publisher to a [`Notebook`] (last status +
//! listener set) and delivers status reports to those listeners on the caller's thread.
//!
//! ## Architecture
//! ```text
//! register_publisher(P)   ─┐
//! unregister_publisher(P) ─┤
//! register_listener(P, L) ─┼─► gate (ReentrantMutex) ─► book (RwLock<HashMap<PublisherId, Notebook>>)
//! unregister_listener(..) ─┤          │
//! broadcast(P, S)         ─┘          └─► snapshot listeners ─► release book ─► Status::dispatch(L, P)
//!
//! is_registered(P) ─► book.read()   (fast path, no gate)
//! ```
//!
//! ## Rules
//! - Every mutation and every delivery holds the gate, giving one total order across threads.
//! - The book lock is never held across a listener callback, so callbacks may re-enter the
//!   registry on the same thread (the gate is reentrant).
//! - Publishers and listeners are stored as `Weak`: dropping the last outside `Arc` makes the
//!   entry dead. Dead entries are evicted by [`Registry::sweep`], on the registration slow
//!   path, and by the optional sweeper task. Eviction timing is best-effort.
//! - Status transitions are not validated; whatever is reported is recorded and broadcast.
//! - Listener panics are caught per listener and logged.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

use parking_lot::{ReentrantMutex, RwLock};
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::core::notebook::Notebook;
use crate::error::ListenError;
use crate::listeners::{Listener, ListenerId, ListenerRef};
use crate::publishers::{PublisherId, PublisherRef};
use crate::status::Status;

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// What `register_listener` does when the publisher is not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachMode {
    /// Report [`ListenError::PublisherMissing`] to the listener and attach nothing (default).
    #[default]
    Strict,
    /// Register the publisher on the caller's behalf, then attach.
    Lenient,
}

/// Lifecycle publish/subscribe registry.
///
/// Construct one per application with [`Registry::new`] and hand the `Arc` to
/// collaborators, or use the lazily created process default [`Registry::global`].
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use lifecast::{
///     AttachMode, Config, ListenError, Listener, ListenerRef, Publisher, PublisherRef, Registry,
///     Status,
/// };
///
/// struct Screen;
/// impl Publisher for Screen {}
///
/// struct Printer;
/// impl Listener for Printer {
///     fn on_create(&self, p: &PublisherRef) {
///         println!("{} created", p.name());
///     }
///     fn on_error(&self, _p: &PublisherRef, err: &ListenError) {
///         eprintln!("{err}");
///     }
/// }
///
/// let registry = Registry::new(Config::default());
/// let screen: PublisherRef = Arc::new(Screen);
/// let printer: ListenerRef = Arc::new(Printer);
///
/// assert!(registry.register_publisher(&screen));
/// registry.register_listener(&screen, &printer, AttachMode::Strict, false);
/// registry.broadcast(&screen, Status::Create);
/// assert_eq!(registry.status(&screen), Some(Status::Create));
///
/// assert!(registry.unregister_publisher(&screen));
/// ```
pub struct Registry {
    cfg: Config,
    gate: ReentrantMutex<()>,
    book: RwLock<HashMap<PublisherId, Notebook>>,
}

impl Registry {
    /// Creates a new, empty registry.
    pub fn new(cfg: Config) -> Arc<Self> {
        Arc::new(Self {
            cfg,
            gate: ReentrantMutex::new(()),
            book: RwLock::new(HashMap::new()),
        })
    }

    /// Returns the process-wide default registry, creating it with
    /// [`Config::default`] on first use.
    pub fn global() -> &'static Arc<Registry> {
        GLOBAL.get_or_init(|| Registry::new(Config::default()))
    }

    /// Returns the configuration this registry was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Registers `publisher` with status [`Status::Initialized`] and no listeners.
    ///
    /// Returns `false` if it is already registered.
    pub fn register_publisher(&self, publisher: &PublisherRef) -> bool {
        if self.is_registered(publisher) {
            return false;
        }
        let _gate = self.gate.lock();

        let id = PublisherId::of(publisher);
        let mut book = self.book.write();
        if book.contains_key(&id) {
            return false;
        }

        let before = book.len();
        book.retain(|_, nb| nb.is_live());
        let evicted = before - book.len();
        if evicted > 0 {
            debug!(evicted, "evicted dropped publishers");
        }

        book.insert(id, Notebook::new(publisher));
        debug!(publisher = publisher.name(), %id, "publisher registered");
        true
    }

    /// Unregisters `publisher`, reporting [`ListenError::PublisherWithdrawn`]
    /// to every listener still attached to it.
    ///
    /// Listeners are notified while the record is still in place, so `on_error`
    /// can read the last status; the record is removed afterwards.
    ///
    /// Returns `false` if it was not registered.
    pub fn unregister_publisher(&self, publisher: &PublisherRef) -> bool {
        if !self.is_registered(publisher) {
            return false;
        }
        let _gate = self.gate.lock();

        let id = PublisherId::of(publisher);
        let listeners = {
            let mut book = self.book.write();
            let Some(notebook) = book.get_mut(&id) else {
                return false;
            };
            notebook.snapshot()
        };

        debug!(
            publisher = publisher.name(),
            %id,
            listeners = listeners.len(),
            "publisher unregistered"
        );
        for listener in &listeners {
            deliver(listener, |l| {
                l.on_error(publisher, &ListenError::PublisherWithdrawn)
            });
        }
        self.book.write().remove(&id);
        true
    }

    /// Attaches `listener` to `publisher`.
    ///
    /// If `publisher` is not registered:
    /// - [`AttachMode::Strict`] reports [`ListenError::PublisherMissing`] to the listener;
    /// - [`AttachMode::Lenient`] registers the publisher and retries once, reporting
    ///   `PublisherMissing` only if that retry fails too.
    ///
    /// With `replay`, the publisher's current status is delivered to this listener
    /// right away (nothing is delivered while the status is still the sentinel).
    ///
    /// Attaching a listener that is already attached has no effect beyond the replay.
    pub fn register_listener(
        &self,
        publisher: &PublisherRef,
        listener: &ListenerRef,
        mode: AttachMode,
        replay: bool,
    ) {
        let _gate = self.gate.lock();

        if self.attach(publisher, listener, replay) {
            return;
        }
        if mode == AttachMode::Lenient {
            self.register_publisher(publisher);
            if self.attach(publisher, listener, replay) {
                return;
            }
        }

        debug!(
            publisher = publisher.name(),
            listener = listener.name(),
            ?mode,
            "listener attach failed: publisher missing"
        );
        deliver(listener, |l| {
            l.on_error(publisher, &ListenError::PublisherMissing)
        });
    }

    /// Detaches `listener` from `publisher`. No-op if either association is absent.
    pub fn unregister_listener(&self, publisher: &PublisherRef, listener: &ListenerRef) {
        let _gate = self.gate.lock();

        let detached = self
            .book
            .write()
            .get_mut(&PublisherId::of(publisher))
            .is_some_and(|nb| nb.detach(ListenerId::of(listener)));
        if detached {
            debug!(
                publisher = publisher.name(),
                listener = listener.name(),
                "listener detached"
            );
        }
    }

    /// Detaches `listener` from every publisher.
    pub fn unregister_listener_all(&self, listener: &ListenerRef) {
        let _gate = self.gate.lock();

        let id = ListenerId::of(listener);
        let detached = self
            .book
            .write()
            .values_mut()
            .map(|nb| nb.detach(id))
            .filter(|detached| *detached)
            .count();
        debug!(listener = listener.name(), detached, "listener detached everywhere");
    }

    /// Records `status` for `publisher` and delivers it to every live listener.
    ///
    /// Silently dropped if `publisher` is not registered. The sentinel is recorded
    /// but delivers nothing.
    pub fn broadcast(&self, publisher: &PublisherRef, status: Status) {
        let _gate = self.gate.lock();

        let listeners = {
            let mut book = self.book.write();
            let Some(notebook) = book.get_mut(&PublisherId::of(publisher)) else {
                trace!(publisher = publisher.name(), %status, "report for unregistered publisher dropped");
                return;
            };
            notebook.set_status(status);
            notebook.snapshot()
        };
        if status.is_sentinel() {
            return;
        }

        trace!(
            publisher = publisher.name(),
            %status,
            listeners = listeners.len(),
            "broadcast"
        );
        for listener in &listeners {
            deliver(listener, |l| {
                status.dispatch(l, publisher);
            });
        }
    }

    /// Evicts entries whose publisher has been dropped and prunes dropped listeners.
    ///
    /// Returns the number of publisher entries evicted.
    pub fn sweep(&self) -> usize {
        let _gate = self.gate.lock();
        self.sweep_locked()
    }

    /// Like [`sweep`](Self::sweep), but gives up immediately if another thread
    /// holds the gate.
    pub fn try_sweep(&self) -> Option<usize> {
        let _gate = self.gate.try_lock()?;
        Some(self.sweep_locked())
    }

    fn sweep_locked(&self) -> usize {
        let mut book = self.book.write();
        let before = book.len();
        book.retain(|_, nb| nb.is_live());
        let evicted = before - book.len();
        let pruned: usize = book.values_mut().map(Notebook::prune).sum();
        if evicted > 0 || pruned > 0 {
            debug!(evicted, pruned, "sweep");
        }
        evicted
    }

    /// Returns true if `publisher` is registered.
    ///
    /// Takes only a shared read lock; does not serialize with other operations.
    pub fn is_registered(&self, publisher: &PublisherRef) -> bool {
        self.book.read().contains_key(&PublisherId::of(publisher))
    }

    /// Returns the last status recorded for `publisher`, or `None` if unregistered.
    pub fn status(&self, publisher: &PublisherRef) -> Option<Status> {
        self.book
            .read()
            .get(&PublisherId::of(publisher))
            .map(Notebook::status)
    }

    /// Returns the number of live listeners attached to `publisher`.
    pub fn listener_count(&self, publisher: &PublisherRef) -> usize {
        self.book
            .read()
            .get(&PublisherId::of(publisher))
            .map_or(0, Notebook::listener_count)
    }

    /// Returns the number of registered publishers that are still alive.
    pub fn len(&self) -> usize {
        self.book.read().values().filter(|nb| nb.is_live()).count()
    }

    /// Returns true if no live publisher is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries including dead ones not yet evicted.
    #[cfg(test)]
    pub(crate) fn entries(&self) -> usize {
        self.book.read().len()
    }

    /// Attaches under the gate; `false` if the publisher is not registered.
    fn attach(&self, publisher: &PublisherRef, listener: &ListenerRef, replay: bool) -> bool {
        let current = {
            let mut book = self.book.write();
            let Some(notebook) = book.get_mut(&PublisherId::of(publisher)) else {
                return false;
            };
            if notebook.attach(listener) {
                debug!(
                    publisher = publisher.name(),
                    listener = listener.name(),
                    "listener attached"
                );
            }
            notebook.status()
        };

        if replay && !current.is_sentinel() {
            deliver(listener, |l| {
                current.dispatch(l, publisher);
            });
        }
        true
    }
}

/// Runs one callback, isolating and logging a panic.
fn deliver(listener: &ListenerRef, call: impl FnOnce(&dyn Listener)) {
    if let Err(panic_err) = panic::catch_unwind(AssertUnwindSafe(|| call(listener.as_ref()))) {
        let info = if let Some(msg) = panic_err.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = panic_err.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        warn!(listener = listener.name(), %info, "listener panicked");
    }
}
