//! Accessibility announcement delivery.
//!
//! Components describe value changes as text; the host forwards them to the
//! platform screen reader. Action vocabulary (increment/decrement) comes
//! from `accesskit`, re-exported at the crate root.

/// Sink for audible accessibility announcements.
pub trait Announcer: Send + Sync {
    /// Queues a message for the platform screen reader.
    fn announce(&self, message: &str);
}

/// An announcer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&self, _message: &str) {}
}
