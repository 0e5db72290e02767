//! Error types used by the lifecast registry.
//!
//! This module defines two enums:
//!
//! - [`ListenError`] - failures delivered to a listener through [`Listener::on_error`](crate::Listener::on_error).
//! - [`StatusError`] - raised when a raw status code cannot be mapped to a [`Status`](crate::Status).
//!
//! Registry operations themselves never return `Result`: registration outcomes are
//! plain `bool`s, and everything a listener needs to know arrives via `on_error`.
//! Both enums provide helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

/// # Failures reported to a listener.
///
/// A listener receives one of these when the registry can no longer honor
/// notifications for a publisher it asked to observe.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenError {
    /// The publisher was not registered when a strict attach was attempted
    /// (or a lenient attach lost the race against a concurrent unregister).
    #[error("error: publisher doesn't exist")]
    PublisherMissing,

    /// The publisher was unregistered while the listener was still attached.
    #[error("publisher no longer publishes")]
    PublisherWithdrawn,
}

impl ListenError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use lifecast::ListenError;
    ///
    /// assert_eq!(ListenError::PublisherWithdrawn.as_label(), "publisher_withdrawn");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenError::PublisherMissing => "publisher_missing",
            ListenError::PublisherWithdrawn => "publisher_withdrawn",
        }
    }

    /// Returns the human-readable message handed to listeners.
    pub fn as_message(&self) -> String {
        self.to_string()
    }
}

/// # Errors produced when decoding raw status codes.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
    /// The code does not correspond to any lifecycle stage.
    #[error("unknown status code {code}")]
    Unknown {
        /// The rejected code.
        code: i32,
    },
}

impl StatusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            StatusError::Unknown { .. } => "status_unknown",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StatusError::Unknown { code } => format!("code={code} is not a lifecycle status"),
        }
    }
}
