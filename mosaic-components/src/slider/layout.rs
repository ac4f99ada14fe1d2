use mosaic_foundation::PxSize;
use thiserror::Error;

use super::{SliderArgs, SliderPart};

/// Error from position math attempted before measurement completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasurementError {
    /// Not all of container, track and thumb have reported a size yet.
    #[error("track geometry is unavailable before measurement completes")]
    Incomplete,
}

impl SliderArgs {
    pub(super) fn domain(&self) -> ValueDomain {
        ValueDomain {
            min: self.minimum_value,
            max: self.maximum_value,
            step: self.step,
        }
    }
}

/// The configured value domain: bounds plus quantization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ValueDomain {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ValueDomain {
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Clamps into the domain. Written with `max`/`min` rather than
    /// `f32::clamp` so a misconfigured inverted domain degrades instead of
    /// panicking.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Rounds to the nearest step multiple and clamps. Continuous domains
    /// (`step == 0`) only clamp.
    pub fn round_to_step(&self, value: f32) -> f32 {
        if self.step > 0.0 {
            self.clamp((value / self.step).round() * self.step)
        } else {
            self.clamp(value)
        }
    }
}

/// Track geometry captured at measurement completion.
///
/// Both conversions are total: out-of-range inputs clamp, and a degenerate
/// domain (`max == min`) maps to a fixed offset/value instead of dividing
/// by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TrackGeometry {
    width: f32,
    thumb_width: f32,
}

impl TrackGeometry {
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Pixel offset along the track for a domain value.
    pub fn offset_for_value(&self, domain: &ValueDomain, value: f32) -> f32 {
        let rounded = domain.round_to_step(value);
        let range = domain.range();
        if range == 0.0 {
            return 0.0;
        }
        let distance = if domain.min < 0.0 {
            rounded + domain.min.abs()
        } else {
            rounded - domain.min
        };
        distance / range * self.width
    }

    /// Domain value for a pixel offset along the track.
    ///
    /// The divisor shortens the track by half the thumb width so the
    /// dragged edge tracks the finger. This is intentionally not the
    /// inverse of [`offset_for_value`](TrackGeometry::offset_for_value).
    pub fn value_for_offset(&self, domain: &ValueDomain, offset: f32) -> f32 {
        let usable = self.width - self.thumb_width / 2.0;
        if usable <= 0.0 {
            return domain.min;
        }
        let range = domain.range();
        if range == 0.0 {
            return domain.min;
        }
        let ratio = offset / usable;
        let value = if domain.step > 0.0 {
            domain.min + ((ratio * range) / domain.step).round() * domain.step
        } else {
            domain.min + ratio * range
        };
        domain.clamp(value)
    }

    /// Offset of the nearest stepped value ("bounce to step").
    pub fn stepped_offset(&self, domain: &ValueDomain, offset: f32) -> f32 {
        self.offset_for_value(domain, self.value_for_offset(domain, offset))
    }
}

/// Measurement bookkeeping for the slider's three tracked elements.
///
/// Raw sizes are stored as they arrive (phase one); once all three are
/// present, [`complete`](Measurements::complete) captures the thumb size
/// used by position math (phase two). Phase one always finishes before
/// phase two runs.
#[derive(Debug, Default)]
pub(super) struct Measurements {
    container: Option<PxSize>,
    track: Option<PxSize>,
    thumb: Option<PxSize>,
    initial_thumb: Option<PxSize>,
    completed: bool,
}

impl Measurements {
    /// Stores a raw measurement. Returns `false` when both dimensions are
    /// unchanged, so redundant layout reports cause no state churn.
    pub fn record(&mut self, part: SliderPart, size: PxSize) -> bool {
        let slot = match part {
            SliderPart::Container => &mut self.container,
            SliderPart::Track => &mut self.track,
            SliderPart::Thumb => &mut self.thumb,
        };
        if *slot == Some(size) {
            return false;
        }
        *slot = Some(size);
        true
    }

    pub fn all_reported(&self) -> bool {
        self.container.is_some() && self.track.is_some() && self.thumb.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks measurement complete and pins the thumb size used by position
    /// math. Thumb resizes after this point do not perturb positions.
    pub fn complete(&mut self) {
        self.initial_thumb = self.thumb;
        self.completed = true;
    }

    /// Invalidates the completed state after a dimension change; the next
    /// measurement cycle re-derives positions.
    pub fn invalidate(&mut self) {
        self.completed = false;
    }

    pub fn track_geometry(&self) -> Result<TrackGeometry, MeasurementError> {
        if !self.completed {
            return Err(MeasurementError::Incomplete);
        }
        let track = self.track.ok_or(MeasurementError::Incomplete)?;
        let thumb = self.initial_thumb.ok_or(MeasurementError::Incomplete)?;
        Ok(TrackGeometry {
            width: track.width.to_f32().max(0.0),
            thumb_width: thumb.width.to_f32().max(0.0),
        })
    }
}
