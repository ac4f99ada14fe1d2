//! An interactive slider component for selecting a value in a range.
//!
//! ## Usage
//!
//! Use to let users pick a value from a continuous or stepped range, or a
//! `[min, max]` interval in range mode. The slider is headless: the host
//! routes layout, gesture, dimension-change and accessibility events into
//! it, and receives visual updates through the platform
//! [`VisualSink`](mosaic_platform::VisualSink).
use std::sync::Arc;

use derive_setters::Setters;
use mosaic_foundation::{Callback, CallbackWith, Color, Dp, PxSize};
use mosaic_platform::{
    Announcer, DimensionsNotifier, DimensionsSubscription, LayoutDirection, NullAnnouncer,
    ThumbKind, VisualSink,
};
use tracing::warn;

use interaction::{SeekState, ThumbOffsets};
use layout::Measurements;

pub use layout::MeasurementError;

mod interaction;
mod layout;
mod render;

/// Accessibility step as a fraction of the range, used when `step` is zero.
const ACCESSIBILITY_STEP_FRACTION: f32 = 0.05;

const DEFAULT_ACTIVE_TRACK: Color = Color::new(0.26, 0.52, 0.96, 1.0);
const DEFAULT_INACTIVE_TRACK: Color = Color::new(0.85, 0.85, 0.85, 1.0);

/// Value pair reported by a slider in range mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValue {
    /// Lower end of the selected interval.
    pub min: f32,
    /// Upper end of the selected interval.
    pub max: f32,
}

/// Element whose measurement a slider layout event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPart {
    /// The component's outer container.
    Container,
    /// The track the thumbs travel along.
    Track,
    /// A thumb handle.
    Thumb,
}

/// Arguments for the [`Slider`] component.
#[derive(Clone, PartialEq, Setters)]
pub struct SliderArgs {
    /// Initial value in scalar mode.
    pub value: f32,
    /// Initial lower value in range mode.
    pub initial_minimum_value: f32,
    /// Initial upper value in range mode.
    pub initial_maximum_value: f32,
    /// Lower bound of the value domain.
    pub minimum_value: f32,
    /// Upper bound of the value domain.
    pub maximum_value: f32,
    /// Quantization granularity. Zero means continuous; a nonzero step must
    /// lie in `(0, maximum_value - minimum_value]`.
    pub step: f32,
    /// Dual-thumb interval selection.
    pub use_range: bool,
    /// Accept gestures without mutating state.
    pub disabled: bool,
    /// Render left-to-right even in a right-to-left layout.
    ///
    /// Ignored in range mode; see [`SliderArgs::effective_disable_rtl`].
    pub disable_rtl: bool,
    /// Tint of the filled part of the track.
    pub minimum_track_tint_color: Color,
    /// Tint of the unfilled part of the track.
    pub maximum_track_tint_color: Color,
    /// Tint of the thumbs.
    pub thumb_tint_color: Color,
    /// Thumb diameter used until the first thumb measurement arrives.
    pub thumb_size: Dp,
    /// Identifier forwarded to test automation.
    #[setters(strip_option, into)]
    pub test_id: Option<String>,
    /// Fires with the new scalar value on every accepted move (scalar mode).
    #[setters(skip)]
    pub on_value_change: CallbackWith<f32>,
    /// Fires with the new interval on every accepted move (range mode).
    #[setters(skip)]
    pub on_range_change: CallbackWith<RangeValue>,
    /// Fires when a touch gesture starts.
    #[setters(skip)]
    pub on_seek_start: Callback,
    /// Fires when a touch gesture ends.
    #[setters(skip)]
    pub on_seek_end: Callback,
}

impl SliderArgs {
    /// Sets the scalar value-change handler.
    pub fn on_value_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = CallbackWith::new(handler);
        self
    }

    /// Sets the scalar value-change handler from a shared callback.
    pub fn on_value_change_shared(mut self, handler: impl Into<CallbackWith<f32>>) -> Self {
        self.on_value_change = handler.into();
        self
    }

    /// Sets the range-change handler.
    pub fn on_range_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(RangeValue) + Send + Sync + 'static,
    {
        self.on_range_change = CallbackWith::new(handler);
        self
    }

    /// Sets the range-change handler from a shared callback.
    pub fn on_range_change_shared(mut self, handler: impl Into<CallbackWith<RangeValue>>) -> Self {
        self.on_range_change = handler.into();
        self
    }

    /// Sets the gesture-start handler.
    pub fn on_seek_start<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_seek_start = Callback::new(handler);
        self
    }

    /// Sets the gesture-end handler.
    pub fn on_seek_end<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_seek_end = Callback::new(handler);
        self
    }

    /// Whether LTR rendering is forced for this configuration.
    ///
    /// Range sliders never force LTR, regardless of `disable_rtl`.
    pub fn effective_disable_rtl(&self) -> bool {
        if self.use_range {
            return false;
        }
        self.disable_rtl
    }

    fn validate(&self) {
        if self.minimum_value >= self.maximum_value {
            warn!(
                test_id = self.test_id.as_deref(),
                "slider minimum_value {} is not below maximum_value {}",
                self.minimum_value,
                self.maximum_value,
            );
        }
        let range = self.maximum_value - self.minimum_value;
        if self.step != 0.0 && (self.step < 0.0 || self.step > range) {
            warn!(
                test_id = self.test_id.as_deref(),
                "slider step {} is outside (0, {range}]", self.step,
            );
        }
        if self.use_range {
            if self.initial_minimum_value > self.initial_maximum_value {
                warn!(
                    test_id = self.test_id.as_deref(),
                    "slider initial range ({}, {}) is inverted",
                    self.initial_minimum_value,
                    self.initial_maximum_value,
                );
            }
        } else if self.value < self.minimum_value || self.value > self.maximum_value {
            warn!(
                test_id = self.test_id.as_deref(),
                "slider value {} is outside [{}, {}]",
                self.value,
                self.minimum_value,
                self.maximum_value,
            );
        }
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            initial_minimum_value: 0.0,
            initial_maximum_value: 1.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            use_range: false,
            disabled: false,
            disable_rtl: false,
            minimum_track_tint_color: DEFAULT_ACTIVE_TRACK,
            maximum_track_tint_color: DEFAULT_INACTIVE_TRACK,
            thumb_tint_color: DEFAULT_ACTIVE_TRACK,
            thumb_size: Dp(24.0),
            test_id: None,
            on_value_change: CallbackWith::new(|_| {}),
            on_range_change: CallbackWith::new(|_| {}),
            on_seek_start: Callback::default(),
            on_seek_end: Callback::default(),
        }
    }
}

/// Last committed domain values, one per thumb.
///
/// These survive re-measurement and are the basis for restoring thumb
/// positions after geometry changes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CommittedValues {
    primary: f32,
    minimum: f32,
}

impl CommittedValues {
    fn from_args(args: &SliderArgs) -> Self {
        let clamp = |value: f32| value.max(args.minimum_value).min(args.maximum_value);
        if args.use_range {
            Self {
                primary: clamp(args.initial_maximum_value),
                minimum: clamp(args.initial_minimum_value),
            }
        } else {
            Self {
                primary: clamp(args.value),
                minimum: args.minimum_value,
            }
        }
    }
}

/// A headless slider: gesture handling, coordinate/value conversion,
/// dual-thumb range logic, measurement bookkeeping and accessibility
/// increment/decrement.
///
/// The host owns event routing: layout reports go to
/// [`handle_layout`](Slider::handle_layout), thumb drags to
/// [`handle_gesture`](Slider::handle_gesture), track taps to
/// [`handle_track_press`](Slider::handle_track_press), rotations to
/// [`handle_dimensions_change`](Slider::handle_dimensions_change), and
/// accessibility actions to
/// [`handle_accessibility_action`](Slider::handle_accessibility_action).
pub struct Slider {
    args: SliderArgs,
    direction: LayoutDirection,
    sink: Arc<dyn VisualSink>,
    announcer: Arc<dyn Announcer>,
    measurements: Measurements,
    offsets: ThumbOffsets,
    active_thumb: ThumbKind,
    committed: CommittedValues,
    seek: SeekState,
    dimensions_subscription: Option<DimensionsSubscription>,
}

impl Slider {
    /// Creates a slider from its configuration and platform services.
    ///
    /// Configuration violations (inverted bounds, out-of-range initial
    /// values, bad step) are logged and degraded to best-effort values,
    /// never escalated.
    pub fn new(args: SliderArgs, direction: LayoutDirection, sink: Arc<dyn VisualSink>) -> Self {
        args.validate();
        let committed = CommittedValues::from_args(&args);
        Self {
            args,
            direction,
            sink,
            announcer: Arc::new(NullAnnouncer),
            measurements: Measurements::default(),
            offsets: ThumbOffsets::default(),
            active_thumb: ThumbKind::Primary,
            committed,
            seek: SeekState::Idle,
            dimensions_subscription: None,
        }
    }

    /// Replaces the accessibility announcer (a no-op sink by default).
    pub fn with_announcer(mut self, announcer: Arc<dyn Announcer>) -> Self {
        self.announcer = announcer;
        self
    }

    /// Subscribes to dimension changes for the component's lifetime.
    ///
    /// `on_change` is the host-built listener that routes the notification
    /// back into [`handle_dimensions_change`](Slider::handle_dimensions_change).
    /// The registration is held as an RAII guard and released when the
    /// slider is dropped or [`unmount`](Slider::unmount) is called.
    pub fn mount(&mut self, notifier: &dyn DimensionsNotifier, on_change: Callback) {
        self.dimensions_subscription = Some(notifier.subscribe(on_change));
    }

    /// Releases the dimension-change registration.
    pub fn unmount(&mut self) {
        self.dimensions_subscription = None;
    }

    /// The configuration this slider was built with.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// Last committed scalar value.
    pub fn value(&self) -> f32 {
        self.committed.primary
    }

    /// Last committed interval, unmirrored.
    ///
    /// RTL mirroring applies only to the values reported through
    /// `on_range_change`; this getter reports raw domain values.
    pub fn range_value(&self) -> RangeValue {
        RangeValue {
            min: self.committed.minimum,
            max: self.committed.primary,
        }
    }

    /// Whether a touch gesture is in progress.
    pub fn is_seeking(&self) -> bool {
        matches!(self.seek, SeekState::Seeking { .. })
    }

    /// The thumb currently receiving gesture input.
    pub fn active_thumb(&self) -> ThumbKind {
        self.active_thumb
    }

    /// Handles a layout report for one of the slider's parts.
    ///
    /// A report with both dimensions unchanged is ignored. Once container,
    /// track and thumb have all reported, the measurement completes: the
    /// thumb's size is captured as the fixed size used in position math,
    /// and both thumbs' offsets are re-derived from the last committed
    /// values. Later thumb resizes do not perturb positions; later track
    /// resizes re-derive them.
    pub fn handle_layout(&mut self, part: SliderPart, size: PxSize) {
        if !self.measurements.record(part, size) {
            return;
        }
        if !self.measurements.is_completed() {
            if self.measurements.all_reported() {
                self.measurements.complete();
                self.restore_offsets();
            }
            return;
        }
        if matches!(part, SliderPart::Track) {
            self.restore_offsets();
        }
    }

    /// Handles a device dimension/orientation change.
    ///
    /// Invalidates the completed measurement; the last committed values
    /// become the initial values that re-measurement restores from.
    pub fn handle_dimensions_change(&mut self) {
        self.seek = SeekState::Idle;
        self.measurements.invalidate();
    }

    /// Moves the thumb to a new value without firing change callbacks.
    ///
    /// This is the prop-driven value path for scalar mode; it is ignored in
    /// range mode and while a gesture is in progress.
    pub fn set_value(&mut self, value: f32) {
        if self.args.use_range || self.is_seeking() {
            return;
        }
        self.committed.primary = value
            .max(self.args.minimum_value)
            .min(self.args.maximum_value);
        self.restore_offsets();
    }

    /// Restores the initial configuration values and thumb positions.
    pub fn reset(&mut self) {
        self.committed = CommittedValues::from_args(&self.args);
        self.seek = SeekState::Idle;
        self.active_thumb = ThumbKind::Primary;
        self.restore_offsets();
    }

    /// Re-derives both thumbs' pixel offsets from the last committed
    /// values and flushes visuals. Safe no-op before measurement completes.
    fn restore_offsets(&mut self) {
        let Ok(geometry) = self.measurements.track_geometry() else {
            return;
        };
        let domain = self.args.domain();
        self.offsets.set(
            ThumbKind::Primary,
            geometry.offset_for_value(&domain, self.committed.primary),
        );
        if self.args.use_range {
            self.offsets.set(
                ThumbKind::Minimum,
                geometry.offset_for_value(&domain, self.committed.minimum),
            );
        } else {
            self.offsets.set(ThumbKind::Minimum, 0.0);
        }
        self.flush_visuals();
    }
}
