//! # Lifecycle listeners.
//!
//! This module provides the [`Listener`] trait and helpers for observing
//! publishers registered in the [`Registry`](crate::Registry).
//!
//! ## Architecture
//! ```text
//! Delivery:
//!   Reporter ── broadcast(P, Status) ──► Registry ──► for each live listener of P
//!                                                          │
//!                                                          ├──► Status::dispatch → on_<stage>(P)
//!                                                          │        │
//!                                                          │   ┌────┴─────┬────────────┐
//!                                                          │   ▼          ▼            ▼
//!                                                          │  custom   ListenerFn  LogListener
//!                                                          │
//!                                                          └──► on_error(P, ListenError)  (unregister / strict attach)
//! ```
//!
//! ## Listener types
//! - **Typed listeners** - implement [`Listener`] and override the stages of interest
//! - **Closure listeners** - [`ListenerFn`] funnels everything into one `Fn(&PublisherRef, Signal)`

mod listener;
mod listener_fn;
#[cfg(feature = "logging")]
mod log;

pub(crate) use listener::ListenerId;
pub use listener::{Listener, ListenerRef};
pub use listener_fn::{ListenerFn, Signal};
#[cfg(feature = "logging")]
pub use log::LogListener;
