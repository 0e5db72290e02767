//! # Lifecycle stages broadcast by publishers.
//!
//! [`Status`] enumerates the stages a publisher reports, plus the
//! [`Status::Initialized`] sentinel that every freshly registered publisher starts in.
//!
//! ## Canonical order
//! ```text
//! Initialized ─► Attach ─► Create ─► CreateView ─► Start ─► Resume
//!                                                             │
//!      Detach ◄─ Destroy ◄─ DestroyView ◄─ Stop ◄─ Pause ◄────┘
//! ```
//!
//! The order is descriptive only: the registry records and broadcasts whatever
//! stage a reporter hands it, in whatever order it arrives.
//!
//! ## Codes
//! Each status has a stable integer [`code`](Status::code) (`-1` for the sentinel,
//! `0..=9` for the stages in canonical order) for reporters that carry raw integers.

use std::fmt;

use crate::error::StatusError;
use crate::listeners::Listener;
use crate::publishers::PublisherRef;

/// Lifecycle stage of a publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Status {
    /// Registered but nothing published yet. Stored, never delivered.
    #[default]
    Initialized,
    Attach,
    Create,
    CreateView,
    Start,
    Resume,
    Pause,
    Stop,
    DestroyView,
    Destroy,
    Detach,
}

impl Status {
    /// The ten deliverable stages in canonical order.
    pub const LIFECYCLE: [Status; 10] = [
        Status::Attach,
        Status::Create,
        Status::CreateView,
        Status::Start,
        Status::Resume,
        Status::Pause,
        Status::Stop,
        Status::DestroyView,
        Status::Destroy,
        Status::Detach,
    ];

    /// Returns `true` for the "not yet started" sentinel.
    #[inline]
    pub fn is_sentinel(self) -> bool {
        matches!(self, Status::Initialized)
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(self) -> &'static str {
        match self {
            Status::Initialized => "initialized",
            Status::Attach => "attach",
            Status::Create => "create",
            Status::CreateView => "create_view",
            Status::Start => "start",
            Status::Resume => "resume",
            Status::Pause => "pause",
            Status::Stop => "stop",
            Status::DestroyView => "destroy_view",
            Status::Destroy => "destroy",
            Status::Detach => "detach",
        }
    }

    /// Returns the stable integer code of this status.
    ///
    /// # Example
    /// ```
    /// use lifecast::Status;
    ///
    /// assert_eq!(Status::Initialized.code(), -1);
    /// assert_eq!(Status::Attach.code(), 0);
    /// assert_eq!(Status::try_from(9), Ok(Status::Detach));
    /// ```
    pub fn code(self) -> i32 {
        match self {
            Status::Initialized => -1,
            Status::Attach => 0,
            Status::Create => 1,
            Status::CreateView => 2,
            Status::Start => 3,
            Status::Resume => 4,
            Status::Pause => 5,
            Status::Stop => 6,
            Status::DestroyView => 7,
            Status::Destroy => 8,
            Status::Detach => 9,
        }
    }

    /// Returns the canonical successor, or `None` after [`Status::Detach`].
    pub fn next(self) -> Option<Status> {
        match self {
            Status::Initialized => Some(Status::Attach),
            Status::Detach => None,
            other => Status::LIFECYCLE.get(other.code() as usize + 1).copied(),
        }
    }

    /// Invokes the listener method matching this status; the sentinel calls nothing.
    pub(crate) fn dispatch(self, listener: &dyn Listener, publisher: &PublisherRef) {
        match self {
            Status::Initialized => {}
            Status::Attach => listener.on_attach(publisher),
            Status::Create => listener.on_create(publisher),
            Status::CreateView => listener.on_create_view(publisher),
            Status::Start => listener.on_start(publisher),
            Status::Resume => listener.on_resume(publisher),
            Status::Pause => listener.on_pause(publisher),
            Status::Stop => listener.on_stop(publisher),
            Status::DestroyView => listener.on_destroy_view(publisher),
            Status::Destroy => listener.on_destroy(publisher),
            Status::Detach => listener.on_detach(publisher),
        }
    }
}

impl TryFrom<i32> for Status {
    type Error = StatusError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Status::Initialized),
            0..=9 => Ok(Status::LIFECYCLE[code as usize]),
            _ => Err(StatusError::Unknown { code }),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_canonical_order() {
        for (i, status) in Status::LIFECYCLE.iter().enumerate() {
            assert_eq!(status.code(), i as i32);
            assert_eq!(Status::try_from(i as i32), Ok(*status));
        }
        assert_eq!(Status::try_from(-1), Ok(Status::Initialized));
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(Status::try_from(10), Err(StatusError::Unknown { code: 10 }));
        assert_eq!(Status::try_from(-2), Err(StatusError::Unknown { code: -2 }));
    }

    #[test]
    fn test_next_walks_the_lifecycle() {
        let mut seen = Vec::new();
        let mut cur = Status::Initialized;
        while let Some(n) = cur.next() {
            seen.push(n);
            cur = n;
        }
        assert_eq!(seen, Status::LIFECYCLE.to_vec());
    }

    #[test]
    fn test_only_initialized_is_sentinel() {
        assert!(Status::default().is_sentinel());
        assert!(Status::LIFECYCLE.iter().all(|s| !s.is_sentinel()));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Status::DestroyView.to_string(), "destroy_view");
    }
}
