//! Unit, color and callback primitives shared across the mosaic crates.
//!
//! ## Usage
//!
//! Express component geometry in [`Px`]/[`Dp`], colors in [`Color`], and
//! component props in the identity-comparable [`Callback`]/[`CallbackWith`]
//! handles.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod color;
pub mod dp;
pub mod px;

pub use callback::{Callback, CallbackWith, Slot};
pub use color::Color;
pub use dp::Dp;
pub use px::{Px, PxPosition, PxSize};
