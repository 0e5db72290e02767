//! # LogListener - simple lifecycle printer
//!
//! A minimal listener that prints every stage and error it receives to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [create] publisher="MainScreen"
//! [start] publisher="MainScreen"
//! [resume] publisher="MainScreen"
//! [error] publisher="MainScreen" err="publisher no longer publishes"
//! ```

use crate::error::ListenError;
use crate::listeners::Listener;
use crate::publishers::PublisherRef;
use crate::status::Status;

/// Lifecycle printer listener.
#[derive(Default)]
pub struct LogListener;

impl LogListener {
    /// Construct a new [`LogListener`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn print(&self, publisher: &PublisherRef, status: Status) {
        println!("[{status}] publisher={:?}", publisher.name());
    }
}

impl Listener for LogListener {
    fn on_attach(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Attach);
    }

    fn on_create(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Create);
    }

    fn on_create_view(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::CreateView);
    }

    fn on_start(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Start);
    }

    fn on_resume(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Resume);
    }

    fn on_pause(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Pause);
    }

    fn on_stop(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Stop);
    }

    fn on_destroy_view(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::DestroyView);
    }

    fn on_destroy(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Destroy);
    }

    fn on_detach(&self, publisher: &PublisherRef) {
        self.print(publisher, Status::Detach);
    }

    fn on_error(&self, publisher: &PublisherRef, error: &ListenError) {
        println!(
            "[error] publisher={:?} err={:?}",
            publisher.name(),
            error.as_message()
        );
    }

    fn name(&self) -> &str {
        "LogListener"
    }
}
