//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(&PublisherRef, Signal)` so callers can
//! observe publishers without declaring a type. Every stage and every error is
//! funneled into the one closure as a [`Signal`].
//!
//! ## Example
//! ```rust
//! use lifecast::{ListenerFn, ListenerRef, Signal, Status};
//!
//! let l: ListenerRef = ListenerFn::arc("trace", |p, signal| match signal {
//!     Signal::Status(Status::Destroy) => println!("{} going away", p.name()),
//!     Signal::Error(err) => eprintln!("{err}"),
//!     _ => {}
//! });
//!
//! assert_eq!(l.name(), "trace");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::ListenError;
use crate::listeners::listener::Listener;
use crate::publishers::PublisherRef;
use crate::status::Status;

/// Notification handed to a [`ListenerFn`] closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The publisher reached a lifecycle stage (never the sentinel).
    Status(Status),
    /// The registry can no longer deliver for this publisher.
    Error(ListenError),
}

/// Function-backed listener implementation.
#[derive(Debug)]
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F>
where
    F: Fn(&PublisherRef, Signal) + Send + Sync + 'static,
{
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }

    #[inline]
    fn emit(&self, publisher: &PublisherRef, status: Status) {
        (self.f)(publisher, Signal::Status(status))
    }
}

impl<F> Listener for ListenerFn<F>
where
    F: Fn(&PublisherRef, Signal) + Send + Sync + 'static,
{
    fn on_attach(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Attach)
    }

    fn on_create(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Create)
    }

    fn on_create_view(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::CreateView)
    }

    fn on_start(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Start)
    }

    fn on_resume(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Resume)
    }

    fn on_pause(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Pause)
    }

    fn on_stop(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Stop)
    }

    fn on_destroy_view(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::DestroyView)
    }

    fn on_destroy(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Destroy)
    }

    fn on_detach(&self, publisher: &PublisherRef) {
        self.emit(publisher, Status::Detach)
    }

    fn on_error(&self, publisher: &PublisherRef, error: &ListenError) {
        (self.f)(publisher, Signal::Error(*error))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publishers::Publisher;
    use std::sync::Mutex;

    struct Dummy;
    impl Publisher for Dummy {}

    #[test]
    fn test_every_stage_maps_to_its_signal() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let l = ListenerFn::new("rec", move |_: &PublisherRef, s| sink.lock().unwrap().push(s));
        let p: PublisherRef = Arc::new(Dummy);

        for status in Status::LIFECYCLE {
            status.dispatch(&l, &p);
        }
        Status::Initialized.dispatch(&l, &p);
        l.on_error(&p, &ListenError::PublisherWithdrawn);

        let mut expected: Vec<Signal> = Status::LIFECYCLE.iter().map(|s| Signal::Status(*s)).collect();
        expected.push(Signal::Error(ListenError::PublisherWithdrawn));
        assert_eq!(*seen.lock().unwrap(), expected);
    }

    #[test]
    fn test_name_is_kept() {
        let l = ListenerFn::arc("audit", |_: &PublisherRef, _| {});
        assert_eq!(l.name(), "audit");
    }
}
