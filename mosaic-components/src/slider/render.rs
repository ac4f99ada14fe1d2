use mosaic_foundation::Px;
use mosaic_platform::{ThumbKind, VisualUpdate};
use smallvec::SmallVec;

use super::Slider;

/// Per-event visual update batch: at most two thumb moves and a fill
/// resize, so it stays on the stack.
pub(super) type VisualBatch = SmallVec<[VisualUpdate; 4]>;

impl Slider {
    /// Pushes the current thumb and filled-track positions to the host's
    /// native views, synchronously, bypassing any declarative re-render.
    ///
    /// This is the drag-frame fast path; state commits and this flush
    /// always happen on the same call stack.
    pub(super) fn flush_visuals(&self) {
        let Ok(geometry) = self.measurements.track_geometry() else {
            return;
        };
        let mut batch = VisualBatch::new();
        let primary = self.offsets.get(ThumbKind::Primary);
        if self.args.use_range {
            let minimum = self.offsets.get(ThumbKind::Minimum);
            batch.push(VisualUpdate::ThumbOffset {
                thumb: ThumbKind::Minimum,
                x: Px::saturating_from_f32(minimum),
            });
            batch.push(VisualUpdate::ThumbOffset {
                thumb: ThumbKind::Primary,
                x: Px::saturating_from_f32(primary),
            });
            // The filled segment spans between the two thumbs.
            batch.push(VisualUpdate::TrackFill {
                left: Px::saturating_from_f32(minimum),
                width: Px::saturating_from_f32((primary - minimum).max(0.0)),
            });
        } else {
            batch.push(VisualUpdate::ThumbOffset {
                thumb: ThumbKind::Primary,
                x: Px::saturating_from_f32(primary),
            });
            batch.push(VisualUpdate::TrackFill {
                left: Px::ZERO,
                width: Px::saturating_from_f32(primary.min(geometry.width())),
            });
        }
        self.sink.apply(&batch);
    }
}
