//! Mapping between the host's pixel scroll offset and deck progress.

use crate::{
    deck::config::DeckConfig,
    foundation::math::{clamp01, non_negative},
};

/// Height of the scroll track in viewport-height units (`vh`):
/// `N * scroll_per_section * 100`.
pub fn track_height_vh(total: usize, cfg: &DeckConfig) -> f64 {
    total as f64 * non_negative(cfg.scroll_per_section) * 100.0
}

/// Height of the scroll track in px for a viewport of `viewport_height` px.
pub fn track_height_px(total: usize, viewport_height: f64, cfg: &DeckConfig) -> f64 {
    track_height_vh(total, cfg) / 100.0 * non_negative(viewport_height)
}

/// Progress of a sticky deck inside its track: 0 when the track's top meets the
/// viewport's top, 1 when the track's bottom meets the viewport's bottom.
pub fn progress_from_offset(scroll_top: f64, track_px: f64, viewport_height: f64) -> f64 {
    let scrollable = non_negative(track_px) - non_negative(viewport_height);
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp01(scroll_top / scrollable)
}

/// Inverse of [`progress_from_offset`]: the scroll offset that lands on `progress`.
pub fn offset_for_progress(progress: f64, track_px: f64, viewport_height: f64) -> f64 {
    let scrollable = (non_negative(track_px) - non_negative(viewport_height)).max(0.0);
    clamp01(progress) * scrollable
}

/// Scroll offset at which card `index` becomes active.
pub fn offset_for_card(index: usize, total: usize, track_px: f64, viewport_height: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    offset_for_progress(
        index.min(total - 1) as f64 / total as f64,
        track_px,
        viewport_height,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/deck/track.rs"]
mod tests;
