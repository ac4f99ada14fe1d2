//! Gesture events delivered by the host's gesture recognizer.

use mosaic_foundation::PxPosition;

/// One event in a touch gesture, as reported by the host recognizer.
///
/// A gesture is a `Grant`, any number of `Move`s, then a `Release`. The
/// recognizer reports *cumulative* horizontal translation since the grant,
/// not per-event deltas; components diff consecutive events themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Touch down on the recognized element.
    Grant {
        /// Touch location relative to the recognized element.
        location: PxPosition,
    },
    /// Incremental drag.
    Move {
        /// Horizontal translation accumulated since the grant.
        translation_x: f32,
    },
    /// Touch up; the gesture is over.
    Release,
}
