//! # Reporter - entry point for whatever observes publisher lifecycles.
//!
//! A [`Reporter`] is the collaborator that turns "publisher P reached stage S"
//! into a registry broadcast. How the reporter learns about stages (hooks,
//! wrappers, explicit calls) is up to the caller.
//!
//! ## Flow
//! ```text
//! report(P, S)
//!   ├─► auto_register? ─► Registry::register_publisher(P)
//!   ├─► S is sentinel?  ─► dropped
//!   └─► Registry::broadcast(P, S)   (dropped there if P is unregistered)
//! ```

use std::sync::Arc;

use crate::core::registry::Registry;
use crate::publishers::PublisherRef;
use crate::status::Status;

/// Forwards lifecycle reports to a [`Registry`].
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use lifecast::{Config, Publisher, PublisherRef, Registry, Status};
///
/// struct Screen;
/// impl Publisher for Screen {}
///
/// let registry = Registry::new(Config { auto_register: true, ..Config::default() });
/// let reporter = registry.reporter();
/// let screen: PublisherRef = Arc::new(Screen);
///
/// reporter.report(&screen, Status::Create);
/// assert_eq!(registry.status(&screen), Some(Status::Create));
/// ```
#[derive(Clone)]
pub struct Reporter {
    registry: Arc<Registry>,
    auto_register: bool,
}

impl Reporter {
    /// Creates a reporter for `registry`.
    pub fn new(registry: Arc<Registry>, auto_register: bool) -> Self {
        Self {
            registry,
            auto_register,
        }
    }

    /// Reports that `publisher` reached `status`.
    pub fn report(&self, publisher: &PublisherRef, status: Status) {
        if self.auto_register {
            self.registry.register_publisher(publisher);
        }
        if status.is_sentinel() {
            return;
        }
        self.registry.broadcast(publisher, status);
    }

    /// Reports a raw status code; unknown codes are ignored.
    pub fn report_code(&self, publisher: &PublisherRef, code: i32) {
        match Status::try_from(code) {
            Ok(status) => self.report(publisher, status),
            Err(err) => tracing::debug!(
                publisher = publisher.name(),
                label = err.as_label(),
                "report ignored: {}",
                err.as_message()
            ),
        }
    }

    /// Returns the registry this reporter feeds.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl Registry {
    /// Builds a [`Reporter`] using this registry's `auto_register` setting.
    pub fn reporter(self: &Arc<Self>) -> Reporter {
        Reporter::new(Arc::clone(self), self.config().auto_register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::registry::AttachMode;
    use crate::listeners::{ListenerFn, ListenerRef, Signal};
    use crate::publishers::Publisher;
    use std::sync::Mutex;

    struct Screen;
    impl Publisher for Screen {}

    fn collect() -> (Arc<Mutex<Vec<Signal>>>, ListenerRef) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let l: ListenerRef = ListenerFn::arc("collect", move |_: &PublisherRef, s| {
            sink.lock().unwrap().push(s)
        });
        (seen, l)
    }

    #[test]
    fn test_reports_without_registration_are_dropped_by_default() {
        let reg = Registry::new(Config::default());
        let reporter = reg.reporter();
        let p: PublisherRef = Arc::new(Screen);

        reporter.report(&p, Status::Create);
        assert!(!reg.is_registered(&p));
    }

    #[test]
    fn test_auto_register_then_broadcast() {
        let reg = Registry::new(Config {
            auto_register: true,
            ..Config::default()
        });
        let reporter = reg.reporter();
        let p: PublisherRef = Arc::new(Screen);

        reporter.report(&p, Status::Attach);
        assert_eq!(reg.status(&p), Some(Status::Attach));

        let (seen, l) = collect();
        reg.register_listener(&p, &l, AttachMode::Strict, false);
        reporter.report(&p, Status::Create);
        assert_eq!(*seen.lock().unwrap(), vec![Signal::Status(Status::Create)]);
    }

    #[test]
    fn test_sentinel_report_keeps_status() {
        let reg = Registry::new(Config::default());
        let reporter = Reporter::new(Arc::clone(&reg), false);
        let p: PublisherRef = Arc::new(Screen);
        reg.register_publisher(&p);

        reporter.report(&p, Status::Resume);
        reporter.report(&p, Status::Initialized);
        assert_eq!(reg.status(&p), Some(Status::Resume));
    }

    #[test]
    fn test_report_code() {
        let reg = Registry::new(Config::default());
        let reporter = reg.reporter();
        let p: PublisherRef = Arc::new(Screen);
        let (seen, l) = collect();
        reg.register_listener(&p, &l, AttachMode::Lenient, false);

        reporter.report_code(&p, 3);
        reporter.report_code(&p, 99);
        assert_eq!(*seen.lock().unwrap(), vec![Signal::Status(Status::Start)]);
        assert!(Arc::ptr_eq(reporter.registry(), &reg));
    }
}
