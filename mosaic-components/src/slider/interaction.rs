use mosaic_foundation::Px;
use mosaic_platform::{GestureEvent, ThumbKind, accesskit::Action};
use tracing::trace;

use super::{ACCESSIBILITY_STEP_FRACTION, CommittedValues, RangeValue, Slider};

/// Seek phase of the gesture state machine: one Idle → Seeking → Idle cycle
/// per touch-and-release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum SeekState {
    Idle,
    Seeking {
        /// Cumulative translation at the previous move event, RTL-adjusted.
        /// Consecutive events are diffed against it to get per-event deltas.
        last_translation: f32,
    },
}

/// Pixel offsets of both thumbs along the track, indexed by [`ThumbKind`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(super) struct ThumbOffsets {
    primary: f32,
    minimum: f32,
}

impl ThumbOffsets {
    pub fn get(&self, thumb: ThumbKind) -> f32 {
        match thumb {
            ThumbKind::Primary => self.primary,
            ThumbKind::Minimum => self.minimum,
        }
    }

    pub fn set(&mut self, thumb: ThumbKind, offset: f32) {
        match thumb {
            ThumbKind::Primary => self.primary = offset,
            ThumbKind::Minimum => self.minimum = offset,
        }
    }
}

impl Slider {
    /// Handles one event of a thumb drag gesture.
    ///
    /// In range mode `thumb` selects which offset subsequent deltas apply
    /// to; outside range mode the primary thumb is always the target. When
    /// the slider is disabled, events are still accepted (the responder
    /// keeps tracking the gesture) but no state changes.
    pub fn handle_gesture(&mut self, thumb: ThumbKind, event: &GestureEvent) {
        match *event {
            GestureEvent::Grant { .. } => self.begin_seek(thumb),
            GestureEvent::Move { translation_x } => self.seek_to(translation_x),
            GestureEvent::Release => self.end_seek(),
        }
    }

    fn begin_seek(&mut self, thumb: ThumbKind) {
        self.active_thumb = if self.args.use_range {
            thumb
        } else {
            ThumbKind::Primary
        };
        self.seek = SeekState::Seeking {
            last_translation: 0.0,
        };
        trace!(
            test_id = self.args.test_id.as_deref(),
            ?thumb,
            "slider seek started"
        );
        self.args.on_seek_start.call();
    }

    fn seek_to(&mut self, translation_x: f32) {
        let SeekState::Seeking { last_translation } = self.seek else {
            return;
        };
        let flipped = translation_x * self.rtl_factor();
        let delta = flipped - last_translation;
        self.seek = SeekState::Seeking {
            last_translation: flipped,
        };
        if self.args.disabled {
            return;
        }
        self.apply_delta(delta);
    }

    fn end_seek(&mut self) {
        if !matches!(self.seek, SeekState::Seeking { .. }) {
            return;
        }
        self.seek = SeekState::Idle;
        if !self.args.disabled && self.args.step > 0.0 {
            self.bounce_to_step();
        }
        trace!(
            test_id = self.args.test_id.as_deref(),
            "slider seek ended"
        );
        self.args.on_seek_end.call();
    }

    /// Handles a direct tap on the track.
    ///
    /// The tap location moves the active thumb directly (step-bounced when
    /// stepping is on). In range mode a tap on the wrong side of the other
    /// thumb switches the active selection first.
    pub fn handle_track_press(&mut self, x: Px) {
        if self.args.disabled {
            return;
        }
        let Ok(geometry) = self.measurements.track_geometry() else {
            return;
        };
        let mut position = x.to_f32();
        if self.direction.is_rtl() && !self.args.effective_disable_rtl() {
            position = geometry.width() - position;
        }
        let position = position.max(0.0).min(geometry.width());
        if self.args.use_range {
            if position < self.offsets.get(ThumbKind::Minimum)
                && self.active_thumb == ThumbKind::Primary
            {
                self.active_thumb = ThumbKind::Minimum;
            } else if position > self.offsets.get(ThumbKind::Primary)
                && self.active_thumb == ThumbKind::Minimum
            {
                self.active_thumb = ThumbKind::Primary;
            }
        }
        let domain = self.args.domain();
        let target = if self.args.step > 0.0 {
            geometry.stepped_offset(&domain, position)
        } else {
            position
        };
        self.commit_offset(self.active_thumb, target);
    }

    /// Handles an accessibility increment/decrement action on the primary
    /// thumb. At the corresponding boundary the action is a no-op; an
    /// accepted action updates value and visuals and announces the result.
    pub fn handle_accessibility_action(&mut self, action: Action) {
        if self.args.disabled {
            return;
        }
        let Ok(geometry) = self.measurements.track_geometry() else {
            return;
        };
        let domain = self.args.domain();
        let current = geometry.value_for_offset(&domain, self.offsets.get(ThumbKind::Primary));
        let step = if self.args.step > 0.0 {
            self.args.step
        } else {
            domain.range().abs() * ACCESSIBILITY_STEP_FRACTION
        };
        let next = match action {
            Action::Increment => current + step,
            Action::Decrement => current - step,
            _ => return,
        };
        let next = domain.clamp(next);
        if (next - current).abs() <= f32::EPSILON {
            return;
        }
        self.offsets
            .set(ThumbKind::Primary, geometry.offset_for_value(&domain, next));
        self.committed.primary = next;
        self.flush_visuals();
        self.args.on_value_change.call(next);
        self.announcer.announce(&format_value(next));
    }

    fn apply_delta(&mut self, delta: f32) {
        let Ok(geometry) = self.measurements.track_geometry() else {
            return;
        };
        let current = self.offsets.get(self.active_thumb);
        let target = (current + delta).max(0.0).min(geometry.width());
        self.commit_offset(self.active_thumb, target);
    }

    fn bounce_to_step(&mut self) {
        let Ok(geometry) = self.measurements.track_geometry() else {
            return;
        };
        let domain = self.args.domain();
        let current = self.offsets.get(self.active_thumb);
        self.commit_offset(self.active_thumb, geometry.stepped_offset(&domain, current));
    }

    /// Accepts or rejects a proposed offset for `thumb`.
    ///
    /// In range mode a move that would cross the other thumb is rejected
    /// outright — state stays untouched, no callback fires. An accepted
    /// move updates the offset table and committed values, flushes visuals,
    /// and fires the mode's change callback.
    fn commit_offset(&mut self, thumb: ThumbKind, offset: f32) {
        let Ok(geometry) = self.measurements.track_geometry() else {
            return;
        };
        if self.args.use_range {
            let crossing = match thumb {
                ThumbKind::Primary => offset < self.offsets.get(ThumbKind::Minimum),
                ThumbKind::Minimum => offset > self.offsets.get(ThumbKind::Primary),
            };
            if crossing {
                return;
            }
        }
        if offset == self.offsets.get(thumb) {
            return;
        }
        self.offsets.set(thumb, offset);
        let domain = self.args.domain();
        if self.args.use_range {
            let raw_min = geometry.value_for_offset(&domain, self.offsets.get(ThumbKind::Minimum));
            let raw_max = geometry.value_for_offset(&domain, self.offsets.get(ThumbKind::Primary));
            self.committed = CommittedValues {
                primary: raw_max,
                minimum: raw_min,
            };
            self.flush_visuals();
            self.args.on_range_change.call(self.mirrored_range(raw_min, raw_max));
        } else {
            let value = geometry.value_for_offset(&domain, offset);
            self.committed.primary = value;
            self.flush_visuals();
            self.args.on_value_change.call(value);
        }
    }

    /// Mirrors the reported interval across the domain midpoint when the
    /// layout is RTL and LTR-forcing is off. The pair stays ordered:
    /// `min <= max` before and after mirroring.
    fn mirrored_range(&self, raw_min: f32, raw_max: f32) -> RangeValue {
        if self.direction.is_rtl() && !self.args.effective_disable_rtl() {
            let span = self.args.minimum_value + self.args.maximum_value;
            RangeValue {
                min: span - raw_max,
                max: span - raw_min,
            }
        } else {
            RangeValue {
                min: raw_min,
                max: raw_max,
            }
        }
    }

    /// Horizontal flip applied to gesture translations: −1 in RTL layouts
    /// unless LTR is forced.
    fn rtl_factor(&self) -> f32 {
        if self.direction.is_rtl() && !self.args.effective_disable_rtl() {
            -1.0
        } else {
            1.0
        }
    }
}

fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
