//! Density-independent pixels.
//!
//! A [`Dp`] stays the same physical size across screen densities. The
//! conversion to [`Px`] goes through a process-wide scale factor that the
//! host shell sets once at startup (and may update on display changes).

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::px::Px;

/// Process-wide dp-to-pixel scale factor.
///
/// Uninitialized reads fall back to `1.0`, so unit tests and headless hosts
/// work without any setup.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

fn scale_factor() -> f64 {
    SCALE_FACTOR
        .get()
        .map(|lock| *lock.read())
        .unwrap_or(1.0)
}

/// Sets the process-wide scale factor.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

/// A density-independent pixel measurement.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a dp value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Converts to physical pixels using the current scale factor.
    pub fn to_px(self) -> Px {
        Px::saturating_from_f32((self.0 * scale_factor()) as f32)
    }

    /// Converts to a fractional pixel count using the current scale factor.
    pub fn to_pixels_f32(self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Converts a pixel value back to dp using the current scale factor.
    pub fn from_px(px: Px) -> Self {
        Self(px.0 as f64 / scale_factor())
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_is_identity() {
        assert_eq!(Dp(16.0).to_px(), Px(16));
        assert_eq!(Dp::from_px(Px(24)), Dp(24.0));
    }

    #[test]
    fn rounds_to_nearest_pixel() {
        assert_eq!(Dp(16.4).to_px(), Px(16));
        assert_eq!(Dp(16.5).to_px(), Px(17));
    }
}
