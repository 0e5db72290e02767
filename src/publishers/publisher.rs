//! # Publisher abstraction and identity.
//!
//! A publisher is any shared object whose lifecycle is reported to the registry.
//! The common handle type is [`PublisherRef`], an `Arc<dyn Publisher>`.
//!
//! Identity is the `Arc` allocation, captured as a [`PublisherId`]. Two handles are
//! the same publisher iff they point at the same allocation; value equality is
//! never consulted.

use std::fmt;
use std::sync::Arc;

/// # Object with a reportable lifecycle.
///
/// Implementors only need to be shareable across threads. The registry never
/// calls into a publisher except for [`name`](Publisher::name) in diagnostics.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use lifecast::{Publisher, PublisherRef};
///
/// struct Screen;
///
/// impl Publisher for Screen {
///     fn name(&self) -> &str { "screen" }
/// }
///
/// let p: PublisherRef = Arc::new(Screen);
/// assert_eq!(p.name(), "screen");
/// ```
pub trait Publisher: Send + Sync + 'static {
    /// Returns a human-readable name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a publisher.
pub type PublisherRef = Arc<dyn Publisher>;

/// Identity of a publisher allocation.
///
/// Stable for as long as the registry holds a `Weak` to the allocation, which
/// keeps the address from being reused by another publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublisherId(usize);

impl PublisherId {
    /// Returns the identity of `publisher`.
    #[inline]
    pub fn of(publisher: &PublisherRef) -> Self {
        Self(Arc::as_ptr(publisher) as *const () as usize)
    }
}

impl fmt::Display for PublisherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
