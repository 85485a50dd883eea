use crate::{
    animation::ease::Ease,
    foundation::error::{RxivisualError, RxivisualResult},
};

/// Fraction of a card's segment spent in the content phase before it starts exiting.
pub const EXIT_THRESHOLD: f64 = 0.75;
/// Viewport heights of scroll track allotted to each card (200vh per card).
pub const SCROLL_PER_SECTION: f64 = 2.0;
/// Vertical pixel step between stacked cards.
pub const STACK_GAP_Y: f64 = 12.0;
/// Scale lost per position behind the active card.
pub const STACK_SCALE_STEP: f64 = 0.04;
/// Opacity lost per position behind the active card.
pub const STACK_OPACITY_STEP: f64 = 0.25;
/// Lowest scale a queued card can reach.
pub const STACK_SCALE_FLOOR: f64 = 0.88;
/// Lowest opacity a queued card can reach.
pub const STACK_OPACITY_FLOOR: f64 = 0.25;
/// Exit travel as a multiple of viewport width (leftwards).
pub const EXIT_DISTANCE: f64 = 1.1;
/// Scale reached by a card at the end of its exit.
pub const EXIT_SCALE_END: f64 = 0.95;
/// Tilt reached by a card at the end of its exit, in degrees.
pub const EXIT_ROTATION_DEG: f64 = -3.0;

/// Tunable layout constants for a card deck.
///
/// Every field defaults to the design constant above, so an empty JSON object
/// is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    pub exit_threshold: f64,
    pub scroll_per_section: f64,
    pub stack_gap_y: f64,
    pub stack_scale_step: f64,
    pub stack_opacity_step: f64,
    pub stack_scale_floor: f64,
    pub stack_opacity_floor: f64,
    pub exit_distance: f64,
    pub exit_scale_end: f64,
    pub exit_rotation_deg: f64,
    /// Shape applied to the exit ramp before it drives the attributes.
    pub exit_ease: Ease,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            exit_threshold: EXIT_THRESHOLD,
            scroll_per_section: SCROLL_PER_SECTION,
            stack_gap_y: STACK_GAP_Y,
            stack_scale_step: STACK_SCALE_STEP,
            stack_opacity_step: STACK_OPACITY_STEP,
            stack_scale_floor: STACK_SCALE_FLOOR,
            stack_opacity_floor: STACK_OPACITY_FLOOR,
            exit_distance: EXIT_DISTANCE,
            exit_scale_end: EXIT_SCALE_END,
            exit_rotation_deg: EXIT_ROTATION_DEG,
            exit_ease: Ease::Linear,
        }
    }
}

impl DeckConfig {
    pub fn from_json_str(s: &str) -> RxivisualResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| RxivisualError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &std::path::Path) -> RxivisualResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            RxivisualError::Other(anyhow::anyhow!(
                "read deck config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> RxivisualResult<()> {
        let finite = [
            ("exit_threshold", self.exit_threshold),
            ("scroll_per_section", self.scroll_per_section),
            ("stack_gap_y", self.stack_gap_y),
            ("stack_scale_step", self.stack_scale_step),
            ("stack_opacity_step", self.stack_opacity_step),
            ("stack_scale_floor", self.stack_scale_floor),
            ("stack_opacity_floor", self.stack_opacity_floor),
            ("exit_distance", self.exit_distance),
            ("exit_scale_end", self.exit_scale_end),
            ("exit_rotation_deg", self.exit_rotation_deg),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(RxivisualError::validation(format!("{name} must be finite")));
            }
        }

        // The exit phase must be non-empty or exit progress divides by zero.
        if self.exit_threshold <= 0.0 || self.exit_threshold >= 1.0 {
            return Err(RxivisualError::validation(
                "exit_threshold must be in (0, 1)",
            ));
        }
        if self.scroll_per_section <= 0.0 {
            return Err(RxivisualError::validation(
                "scroll_per_section must be > 0",
            ));
        }
        for (name, v) in [
            ("stack_gap_y", self.stack_gap_y),
            ("stack_scale_step", self.stack_scale_step),
            ("stack_opacity_step", self.stack_opacity_step),
            ("exit_distance", self.exit_distance),
        ] {
            if v < 0.0 {
                return Err(RxivisualError::validation(format!("{name} must be >= 0")));
            }
        }
        for (name, v) in [
            ("stack_scale_floor", self.stack_scale_floor),
            ("stack_opacity_floor", self.stack_opacity_floor),
            ("exit_scale_end", self.exit_scale_end),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(RxivisualError::validation(format!(
                    "{name} must be in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/config.rs"]
mod tests;
