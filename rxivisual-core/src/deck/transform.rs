//! Scroll progress to deck layout.
//!
//! The scroll track is split into one equal segment per card. Segment `i` is
//! `[i/N, (i+1)/N)`; inside the active segment the first `exit_threshold` of
//! local progress is the content phase and the remainder is the exit phase.
//! Every function here is pure: the same inputs always give bit-identical output.

use crate::{
    deck::config::DeckConfig,
    foundation::core::{Affine, Point, ScrollProgress, Vec2, Viewport},
    foundation::math::{clamp01, lerp, non_negative},
};

/// Index of the card whose segment contains `progress`.
///
/// `clamp(floor(v * N), 0, N - 1)`; 0 for an empty deck.
pub fn active_index(progress: ScrollProgress, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let scaled = (progress.get() * total as f64).floor();
    (scaled.max(0.0) as usize).min(total - 1)
}

/// `active / (N - 1)`, or 0 when the deck has at most one card.
pub fn normalized_progress(active: usize, total: usize) -> f64 {
    if total <= 1 {
        return 0.0;
    }
    clamp01(active as f64 / (total - 1) as f64)
}

/// Deck-wide quantities shared by every card at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DeckState {
    pub total: usize,
    pub progress: f64,
    pub active_index: usize,
    /// Progress through the active card's own segment, in `[0, 1]`.
    pub local_progress: f64,
    /// Linear exit ramp of the active card: 0 in the content phase, 0..=1 in the exit phase.
    pub exit_progress: f64,
}

impl DeckState {
    pub fn at(progress: ScrollProgress, total: usize, cfg: &DeckConfig) -> Self {
        let v = progress.get();
        if total == 0 {
            return Self {
                total,
                progress: v,
                active_index: 0,
                local_progress: 0.0,
                exit_progress: 0.0,
            };
        }

        let active = active_index(progress, total);
        let local = clamp01(v * total as f64 - active as f64);
        Self {
            total,
            progress: v,
            active_index: active,
            local_progress: local,
            exit_progress: exit_progress(local, cfg.exit_threshold),
        }
    }

    /// Signed distance of `index` from the active card: 0 active, >0 queued, <0 exited.
    pub fn raw_deck_pos(&self, index: usize) -> i64 {
        index as i64 - self.active_index as i64
    }

    /// Progress through the content phase of the active card, in `[0, 1]`.
    pub fn content_phase_progress(&self, cfg: &DeckConfig) -> f64 {
        if cfg.exit_threshold <= 0.0 {
            return 1.0;
        }
        clamp01(self.local_progress / cfg.exit_threshold)
    }

    pub fn phase(&self, index: usize) -> CardPhase {
        match self.raw_deck_pos(index) {
            d if d < 0 => CardPhase::Exited,
            d if d > 0 => CardPhase::Queued,
            _ if self.exit_progress >= 1.0 => CardPhase::Exited,
            _ if self.exit_progress > 0.0 => CardPhase::Exiting,
            _ => CardPhase::Reading,
        }
    }
}

fn exit_progress(local: f64, threshold: f64) -> f64 {
    if local < threshold {
        return 0.0;
    }
    let span = 1.0 - threshold;
    if span <= 0.0 {
        return 1.0;
    }
    clamp01((local - threshold) / span)
}

/// Per-card lifecycle, re-derived from scroll progress on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPhase {
    Queued,
    Reading,
    Exiting,
    Exited,
}

/// Visual attributes a rendering layer applies to one card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CardStyle {
    /// Horizontal offset in px; negative moves left.
    pub offset_x: f64,
    /// Vertical offset in px; positive moves down.
    pub offset_y: f64,
    pub scale: f64,
    /// In `[0, 1]`.
    pub opacity: f64,
    pub rotation_deg: f64,
    /// Higher paints above lower.
    pub stack_order: i32,
}

impl CardStyle {
    /// Compose the style as `translate * rotate * scale` about `origin`
    /// (usually the card's center in its untransformed layout).
    pub fn to_affine(&self, origin: Point) -> Affine {
        let pivot = origin.to_vec2();
        Affine::translate(Vec2::new(self.offset_x, self.offset_y))
            * Affine::translate(pivot)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-pivot)
    }
}

/// Style of card `index` for a precomputed [`DeckState`]. O(1).
pub fn card_style(
    index: usize,
    state: &DeckState,
    viewport: Viewport,
    cfg: &DeckConfig,
) -> CardStyle {
    let total = state.total.min(i32::MAX as usize - 2) as i32;
    let exit_x = -cfg.exit_distance * non_negative(viewport.width);
    let eased = cfg.exit_ease.apply(state.exit_progress);
    let pos = state.raw_deck_pos(index);

    if pos < 0 {
        return CardStyle {
            offset_x: exit_x,
            offset_y: 0.0,
            scale: cfg.exit_scale_end,
            opacity: 0.0,
            // Only the exiting card tilts.
            rotation_deg: 0.0,
            stack_order: (index.min(i32::MAX as usize) as i32) - total - 1,
        };
    }

    if pos == 0 {
        return CardStyle {
            offset_x: exit_x * eased,
            offset_y: 0.0,
            scale: lerp(1.0, cfg.exit_scale_end, eased),
            opacity: clamp01(1.0 - eased),
            rotation_deg: cfg.exit_rotation_deg * eased,
            // Pinned above everything while leaving.
            stack_order: if state.exit_progress > 0.0 {
                total + 1
            } else {
                total
            },
        };
    }

    // Queued cards glide forward by the exit ramp so that the card right
    // behind reaches the active pose exactly when the exiting card is gone.
    let effective = pos as f64 - eased;
    CardStyle {
        offset_x: 0.0,
        offset_y: effective * cfg.stack_gap_y,
        scale: (1.0 - effective * cfg.stack_scale_step).max(cfg.stack_scale_floor),
        opacity: clamp01((1.0 - effective * cfg.stack_opacity_step).max(cfg.stack_opacity_floor)),
        rotation_deg: 0.0,
        stack_order: total.saturating_sub(pos.min(i64::from(i32::MAX)) as i32),
    }
}

/// Convenience form of [`card_style`] taking raw inputs.
pub fn card_style_at(
    index: usize,
    total: usize,
    progress: ScrollProgress,
    viewport: Viewport,
    cfg: &DeckConfig,
) -> CardStyle {
    card_style(index, &DeckState::at(progress, total, cfg), viewport, cfg)
}

#[cfg(test)]
#[path = "../../tests/unit/deck/transform.rs"]
mod tests;
