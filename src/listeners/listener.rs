//! # Lifecycle listener trait.
//!
//! Provides [`Listener`], the extension point through which observers receive
//! publisher lifecycle stages.
//!
//! Each listener gets:
//! - **One provided no-op method per stage** (override only what you need)
//! - **A required [`on_error`](Listener::on_error)** for when the registry can no longer deliver
//! - **Panic isolation** (a panicking callback is logged; other listeners still get the stage)
//!
//! ## Rules
//! - Callbacks run synchronously on the reporter's thread **with the registry gate held**.
//!   Long work in a callback blocks every registry operation process-wide.
//! - Calling back into the registry from a callback on the same thread is allowed.
//! - The registry stores listeners weakly: keep your own `Arc` alive for as long as
//!   you want notifications.
//!
//! ## Example
//! ```rust
//! use lifecast::{Listener, ListenError, PublisherRef};
//!
//! struct Visibility;
//!
//! impl Listener for Visibility {
//!     fn on_resume(&self, p: &PublisherRef) {
//!         println!("{} visible", p.name());
//!     }
//!
//!     fn on_pause(&self, p: &PublisherRef) {
//!         println!("{} hidden", p.name());
//!     }
//!
//!     fn on_error(&self, p: &PublisherRef, err: &ListenError) {
//!         eprintln!("{}: {err}", p.name());
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::error::ListenError;
use crate::publishers::PublisherRef;

/// Observer of publisher lifecycle stages.
#[allow(unused_variables)]
pub trait Listener: Send + Sync + 'static {
    fn on_attach(&self, publisher: &PublisherRef) {}

    fn on_create(&self, publisher: &PublisherRef) {}

    fn on_create_view(&self, publisher: &PublisherRef) {}

    fn on_start(&self, publisher: &PublisherRef) {}

    fn on_resume(&self, publisher: &PublisherRef) {}

    fn on_pause(&self, publisher: &PublisherRef) {}

    fn on_stop(&self, publisher: &PublisherRef) {}

    fn on_destroy_view(&self, publisher: &PublisherRef) {}

    fn on_destroy(&self, publisher: &PublisherRef) {}

    fn on_detach(&self, publisher: &PublisherRef) {}

    /// Called when the registry cannot honor notifications for `publisher`:
    /// it was missing at attach time, or it was unregistered while this
    /// listener was attached.
    ///
    /// Release anything tied to `publisher` here.
    fn on_error(&self, publisher: &PublisherRef, error: &ListenError);

    /// Returns the listener name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a listener.
pub type ListenerRef = Arc<dyn Listener>;

/// Allocation identity of a listener; set membership is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListenerId(usize);

impl ListenerId {
    #[inline]
    pub(crate) fn of(listener: &ListenerRef) -> Self {
        Self(Arc::as_ptr(listener) as *const () as usize)
    }
}
