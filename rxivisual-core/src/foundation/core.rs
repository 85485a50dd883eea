use crate::foundation::math::{clamp01, non_negative};

pub use kurbo::{Affine, Point, Vec2};

/// Fraction of the deck's scroll track traversed, always in `[0, 1]`.
///
/// Overscroll (rubber-banding) values outside the range are clamped and NaN
/// reads as 0, so every downstream computation sees a valid progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    pub fn new(v: f64) -> Self {
        Self(clamp01(v))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for ScrollProgress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

/// Visible area of the host scroll container, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
