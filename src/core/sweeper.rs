//! # Background eviction of dropped publishers.
//!
//! Entries of dropped publishers are evicted lazily on registration and by
//! [`Registry::sweep`]. For long-lived processes with few registrations,
//! [`Registry::spawn_sweeper`] adds a periodic pass on a tokio runtime.
//!
//! ## Rules
//! - The task holds only a `Weak<Registry>`; dropping the registry ends it.
//! - A tick that finds the gate busy is skipped (`try_sweep`), so the task never
//!   blocks a runtime worker behind listener callbacks.
//! - Cancellation via the supplied `CancellationToken` ends it promptly.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::core::registry::Registry;

impl Registry {
    /// Spawns the periodic sweeper on the current tokio runtime.
    ///
    /// Returns `None` (and spawns nothing) when `Config::sweep_interval` is zero.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn_sweeper(self: &Arc<Self>, token: CancellationToken) -> Option<JoinHandle<()>> {
        let period = self.config().sweep_period()?;
        let registry = Arc::downgrade(self);

        Some(tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let Some(live) = registry.upgrade() else {
                            break;
                        };
                        if live.try_sweep().is_none() {
                            trace!("sweep skipped: registry busy");
                        }
                    }
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::publishers::{Publisher, PublisherRef};
    use std::time::Duration;

    struct Screen;
    impl Publisher for Screen {}

    fn fast() -> Config {
        Config {
            sweep_interval: Duration::from_millis(10),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_sweeper_evicts_dropped_publishers() {
        let reg = Registry::new(fast());
        let token = CancellationToken::new();
        let handle = reg.spawn_sweeper(token.clone()).expect("sweeper enabled");

        let p: PublisherRef = Arc::new(Screen);
        reg.register_publisher(&p);
        drop(p);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(reg.entries(), 0);

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_zero_interval_spawns_nothing() {
        let reg = Registry::new(Config {
            sweep_interval: Duration::ZERO,
            ..Config::default()
        });
        assert!(reg.spawn_sweeper(CancellationToken::new()).is_none());
    }

    #[tokio::test]
    async fn test_sweeper_stops_with_registry() {
        let reg = Registry::new(fast());
        let handle = reg.spawn_sweeper(CancellationToken::new()).expect("sweeper enabled");
        drop(reg);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper exits once the registry is gone")
            .unwrap();
    }
}
