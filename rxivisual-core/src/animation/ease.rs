use crate::foundation::math::clamp01;

/// Shape of a card's exit ramp.
///
/// Every curve maps `[0, 1]` onto `[0, 1]` with fixed endpoints, so easing
/// changes how a card leaves without moving where the hand-off happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Exit progress follows scroll progress one to one.
    #[default]
    Linear,
    /// Fast start, gentle settle.
    OutQuad,
    /// Like `OutQuad` with a longer tail.
    OutCubic,
    /// Slow start and end, fastest mid-exit.
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp01(t);
        let rest = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - rest * rest,
            Self::OutCubic => 1.0 - rest.powi(3),
            Self::InOutCubic if t < 0.5 => 4.0 * t.powi(3),
            Self::InOutCubic => 1.0 - (2.0 * rest).powi(3) / 2.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
