//! Registry core: bookkeeping, fan-out, and reporting.
//!
//! The public API from this module is [`Registry`], [`AttachMode`] and [`Reporter`].
//!
//! Internal modules:
//! - [`notebook`]: per-publisher record (status + weak listener set);
//! - [`registry`]: publisher map, gate, registration and broadcast;
//! - [`reporter`]: forwards lifecycle reports, optionally auto-registering;
//! - [`sweeper`]: periodic eviction of dropped publishers on tokio.

mod notebook;
mod registry;
mod reporter;
mod sweeper;

pub use registry::{AttachMode, Registry};
pub use reporter::Reporter;
