//! Walks a screen through its full lifecycle with a printing listener attached.
//!
//! Run with: `cargo run --example fragment --features logging`

use std::sync::Arc;

use lifecast::{
    AttachMode, Config, ListenerFn, ListenerRef, LogListener, Publisher, PublisherRef, Registry,
    Signal, Status,
};

struct Screen {
    title: &'static str,
}

impl Publisher for Screen {
    fn name(&self) -> &str {
        self.title
    }
}

fn main() {
    let registry = Registry::new(Config {
        auto_register: true,
        ..Config::default()
    });
    let reporter = registry.reporter();

    let home: PublisherRef = Arc::new(Screen { title: "home" });
    let log: ListenerRef = Arc::new(LogListener::new());
    registry.register_listener(&home, &log, AttachMode::Lenient, false);

    for status in Status::LIFECYCLE.into_iter().take(5) {
        reporter.report(&home, status);
    }

    // A late listener catches up to the current stage.
    let late: ListenerRef = ListenerFn::arc("late", |p, signal| {
        if let Signal::Status(status) = signal {
            println!("late listener sees {} at {status}", p.name());
        }
    });
    registry.register_listener(&home, &late, AttachMode::Strict, true);

    for status in Status::LIFECYCLE.into_iter().skip(5) {
        reporter.report(&home, status);
    }

    registry.unregister_publisher(&home);
}
