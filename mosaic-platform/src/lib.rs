//! Platform services for mosaic components.
//!
//! ## Usage
//!
//! The host shell owns the windowing, gesture-recognition and accessibility
//! machinery; components consume it through the small service surface
//! defined here. Everything is injected explicitly at component
//! construction time, so tests can substitute deterministic fakes.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod accessibility;
pub mod dimensions;
pub mod gesture;
pub mod layout_direction;
pub mod visual;

pub use accessibility::{Announcer, NullAnnouncer};
pub use dimensions::{DimensionsNotifier, DimensionsSubscription, StaticDimensions};
pub use gesture::GestureEvent;
pub use layout_direction::LayoutDirection;
pub use visual::{NullVisualSink, ThumbKind, VisualSink, VisualUpdate};

/// Accessibility vocabulary shared with the host's accessibility tree.
pub use accesskit;
