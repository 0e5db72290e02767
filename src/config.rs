//! # Registry configuration.
//!
//! Provides [`Config`], the settings a [`Registry`](crate::Registry) is constructed with.
//!
//! Config is used in two ways:
//! 1. **Reporter behavior**: `Registry::reporter()` copies `auto_register`
//! 2. **Background eviction**: `Registry::spawn_sweeper()` reads `sweep_interval`
//!
//! ## Sentinel values
//! - `sweep_interval = 0s` → no periodic sweeper (eviction happens on access only)

use std::time::Duration;

/// Configuration for a lifecast registry.
///
/// ## Field semantics
/// - `auto_register`: Register a publisher on its first report if nobody did (`false` by default)
/// - `sweep_interval`: Period of the background eviction task (`0s` = disabled)
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether a [`Reporter`](crate::Reporter) registers an unknown publisher
    /// before broadcasting its status.
    ///
    /// When `false`, reports from unregistered publishers are dropped; callers
    /// register explicitly or let a lenient listener attach do it for them.
    pub auto_register: bool,

    /// How often the optional sweeper evicts entries of dropped publishers.
    ///
    /// Only read by `Registry::spawn_sweeper`; nothing sweeps periodically unless
    /// that is called. Without it, dead entries go on the next registration or an
    /// explicit `Registry::sweep`.
    ///
    /// - `Duration::ZERO` = `spawn_sweeper` spawns nothing
    /// - `> 0` = sweep period
    pub sweep_interval: Duration,
}

impl Config {
    /// Returns the sweep period as an `Option`.
    ///
    /// - `None` → no background sweeper
    /// - `Some(d)` → sweep every `d`
    #[inline]
    pub fn sweep_period(&self) -> Option<Duration> {
        if self.sweep_interval == Duration::ZERO {
            None
        } else {
            Some(self.sweep_interval)
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `auto_register = false`
    /// - `sweep_interval = 30s`
    fn default() -> Self {
        Self {
            auto_register: false,
            sweep_interval: Duration::from_secs(30),
        }
    }
}
