//! Publishers: objects whose lifecycle stages are broadcast.
//!
//! - [`Publisher`] - trait implemented by reportable objects
//! - [`PublisherRef`] - shared handle (`Arc<dyn Publisher>`)
//! - [`PublisherId`] - allocation identity used as the registry key

mod publisher;

pub use publisher::{Publisher, PublisherId, PublisherRef};
