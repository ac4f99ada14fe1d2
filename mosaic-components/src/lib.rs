//! Interactive components for the mosaic UI library.
//!
//! ## Usage
//!
//! Construct a component with its args and the platform services it
//! consumes, then route the host's layout, gesture and accessibility events
//! into it:
//!
//! ```
//! use std::sync::Arc;
//!
//! use mosaic_components::slider::{Slider, SliderArgs, SliderPart};
//! use mosaic_foundation::{Px, PxPosition, PxSize};
//! use mosaic_platform::{GestureEvent, LayoutDirection, NullVisualSink, ThumbKind};
//!
//! let args = SliderArgs::default()
//!     .minimum_value(0.0)
//!     .maximum_value(100.0)
//!     .on_value_change(|value| println!("value: {value}"));
//! let mut slider = Slider::new(args, LayoutDirection::LeftToRight, Arc::new(NullVisualSink));
//!
//! slider.handle_layout(SliderPart::Container, PxSize::new(Px(200), Px(40)));
//! slider.handle_layout(SliderPart::Track, PxSize::new(Px(200), Px(4)));
//! slider.handle_layout(SliderPart::Thumb, PxSize::new(Px(20), Px(20)));
//!
//! let grant = GestureEvent::Grant { location: PxPosition::ORIGIN };
//! slider.handle_gesture(ThumbKind::Primary, &grant);
//! slider.handle_gesture(ThumbKind::Primary, &GestureEvent::Move { translation_x: 95.0 });
//! slider.handle_gesture(ThumbKind::Primary, &GestureEvent::Release);
//! assert_eq!(slider.value(), 50.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;
pub mod thumb;
