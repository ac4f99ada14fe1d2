//! The slider's draggable handle.
//!
//! A thumb is a leaf visual element; its one job beyond being drawn is to
//! report its measured size upward so the slider's position math can
//! account for the handle's footprint.

use derive_setters::Setters;
use mosaic_foundation::{CallbackWith, Color, Dp, PxSize};

/// Arguments for the [`Thumb`] component.
#[derive(Clone, PartialEq, Setters)]
pub struct ThumbArgs {
    /// Diameter of the handle.
    pub diameter: Dp,
    /// Fill color of the handle.
    pub color: Color,
    /// Identifier forwarded to test automation.
    #[setters(strip_option, into)]
    pub test_id: Option<String>,
    /// Fires with the measured size whenever it changes.
    #[setters(skip)]
    pub on_layout: CallbackWith<PxSize>,
}

impl ThumbArgs {
    /// Sets the layout-report handler.
    pub fn on_layout<F>(mut self, handler: F) -> Self
    where
        F: Fn(PxSize) + Send + Sync + 'static,
    {
        self.on_layout = CallbackWith::new(handler);
        self
    }
}

impl Default for ThumbArgs {
    fn default() -> Self {
        Self {
            diameter: Dp(24.0),
            color: Color::WHITE,
            test_id: None,
            on_layout: CallbackWith::new(|_| {}),
        }
    }
}

/// A leaf handle element that reports its own layout size upward.
pub struct Thumb {
    args: ThumbArgs,
    size: Option<PxSize>,
}

impl Thumb {
    /// Creates a thumb from its configuration.
    pub fn new(args: ThumbArgs) -> Self {
        Self { args, size: None }
    }

    /// The configuration this thumb was built with.
    pub fn args(&self) -> &ThumbArgs {
        &self.args
    }

    /// Last measured size, if any layout has been reported.
    pub fn measured_size(&self) -> Option<PxSize> {
        self.size
    }

    /// Handles a layout report. Repeats with both dimensions unchanged are
    /// dropped; a changed size is stored and forwarded through `on_layout`.
    pub fn handle_layout(&mut self, size: PxSize) {
        if self.size == Some(size) {
            return;
        }
        self.size = Some(size);
        self.args.on_layout.call(size);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mosaic_foundation::Px;
    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn reports_size_changes_upward() {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let mut thumb = Thumb::new(ThumbArgs::default().on_layout({
            let reports = reports.clone();
            move |size| reports.lock().push(size)
        }));

        let size = PxSize::new(Px(20), Px(20));
        thumb.handle_layout(size);
        thumb.handle_layout(size);
        thumb.handle_layout(PxSize::new(Px(28), Px(28)));

        assert_eq!(thumb.measured_size(), Some(PxSize::new(Px(28), Px(28))));
        assert_eq!(reports.lock().len(), 2);
    }
}
