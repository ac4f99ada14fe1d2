//! Imperative visual updates.
//!
//! ## Usage
//!
//! During a drag, components push position changes straight to the host's
//! native views through a [`VisualSink`] instead of going through a full
//! declarative re-render. This is the drag-frame fast path; the sink must
//! apply updates synchronously on the calling stack.

use mosaic_foundation::Px;

/// Which of a slider's thumbs an update refers to.
///
/// Outside range mode only `Primary` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbKind {
    /// The single thumb, or the maximum thumb in range mode.
    Primary,
    /// The minimum thumb in range mode.
    Minimum,
}

/// One imperative style mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualUpdate {
    /// Moves a thumb to a horizontal offset in track coordinates.
    ThumbOffset {
        /// The thumb being moved.
        thumb: ThumbKind,
        /// Left-edge offset along the track.
        x: Px,
    },
    /// Resizes the filled track segment.
    TrackFill {
        /// Left edge of the filled segment.
        left: Px,
        /// Width of the filled segment.
        width: Px,
    },
}

/// Receiver for imperative visual updates.
pub trait VisualSink: Send + Sync {
    /// Applies a batch of updates to the native views, synchronously.
    fn apply(&self, updates: &[VisualUpdate]);
}

/// A sink that discards updates.
///
/// Placeholder for hosts that re-render declaratively on every change and
/// have no fast path to feed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisualSink;

impl VisualSink for NullVisualSink {
    fn apply(&self, _updates: &[VisualUpdate]) {}
}
