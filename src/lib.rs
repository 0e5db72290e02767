//! # lifecast
//!
//! **Lifecast** is a lifecycle-event publish/subscribe registry for Rust.
//!
//! Objects that move through a fixed sequence of lifecycle stages ("publishers")
//! broadcast each stage to a dynamic set of listeners, without knowing who those
//! listeners are. The registry tracks publishers weakly: dropping the last outside
//! handle to a publisher is enough for its entry to go away.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Publisher   │   │  Publisher   │   │  Publisher   │
//!     │  (screen #1) │   │  (screen #2) │   │  (dialog)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ stage reached    │                  │
//!            ▼                  ▼                  ▼
//!     ┌──────────────────────────────────────────────────────┐
//!     │  Reporter (auto_register?) ──► Registry::broadcast   │
//!     └──────────────────────────┬───────────────────────────┘
//!                                ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry                                                         │
//! │  - gate: ReentrantMutex (total order over mutations + delivery)   │
//! │  - book: PublisherId → Notebook { status, Weak<listeners> }       │
//! │  - sweep: evicts entries of dropped publishers                    │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!    listener.on_start  listener.on_start  listener.on_start
//!   (same thread, gate held, panics isolated per listener)
//! ```
//!
//! ### Lifecycle
//! ```text
//! register_publisher(P) ──► Notebook { status: Initialized, listeners: {} }
//!
//! register_listener(P, L, mode, replay)
//!   ├─ P registered    ─► add L (set semantics) ─► replay? deliver current status to L
//!   ├─ P missing, Strict  ─► L.on_error(P, PublisherMissing)
//!   └─ P missing, Lenient ─► register_publisher(P) ─► retry once
//!
//! broadcast(P, S) ──► status = S ──► every live L: on_<S>(P)   (sentinel: record only)
//!
//! unregister_publisher(P) ──► every live L: on_error(P, PublisherWithdrawn) ──► remove Notebook
//!
//! drop(last Arc of P) ──► entry dead ──► evicted by sweep / next registration / sweeper
//! ```
//!
//! ## Features
//! | Area               | Description                                                   | Key types / traits                         |
//! |--------------------|---------------------------------------------------------------|--------------------------------------------|
//! | **Registry**       | Register publishers, attach listeners, broadcast stages.      | [`Registry`], [`AttachMode`]               |
//! | **Listener API**   | Per-stage callbacks with no-op defaults, closure listeners.   | [`Listener`], [`ListenerFn`], [`Signal`]   |
//! | **Publishers**     | Identity-by-allocation handles, weakly tracked.               | [`Publisher`], [`PublisherRef`]            |
//! | **Reporting**      | Feed stages in, optionally auto-registering.                  | [`Reporter`], [`Status`]                   |
//! | **Errors**         | Typed errors delivered to listeners.                          | [`ListenError`], [`StatusError`]           |
//! | **Configuration**  | Auto-registration and sweep period.                           | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogListener`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use lifecast::{AttachMode, Config, ListenerFn, ListenerRef, Publisher, PublisherRef, Registry, Signal, Status};
//!
//! struct Screen;
//! impl Publisher for Screen {
//!     fn name(&self) -> &str { "screen" }
//! }
//!
//! let registry = Registry::new(Config::default());
//! let screen: PublisherRef = Arc::new(Screen);
//!
//! let listener: ListenerRef = ListenerFn::arc("printer", |p, signal| match signal {
//!     Signal::Status(status) => println!("{} -> {status}", p.name()),
//!     Signal::Error(err) => eprintln!("{}: {err}", p.name()),
//! });
//!
//! // Lenient attach registers the publisher on our behalf.
//! registry.register_listener(&screen, &listener, AttachMode::Lenient, false);
//!
//! let reporter = registry.reporter();
//! reporter.report(&screen, Status::Create);
//! reporter.report(&screen, Status::Start);
//!
//! assert_eq!(registry.status(&screen), Some(Status::Start));
//! assert!(registry.unregister_publisher(&screen));
//! ```
mod config;
mod core;
mod error;
mod listeners;
mod publishers;
mod status;

// ---- Public re-exports ----

pub use config::Config;
pub use crate::core::{AttachMode, Registry, Reporter};
pub use error::{ListenError, StatusError};
pub use listeners::{Listener, ListenerFn, ListenerRef, Signal};
pub use publishers::{Publisher, PublisherId, PublisherRef};
pub use status::Status;

// Optional: expose a simple built-in stdout listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
