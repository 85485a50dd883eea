//! Inner scrolling of card content during the content phase.

use crate::{
    deck::{config::DeckConfig, transform::DeckState},
    foundation::math::non_negative,
};

/// Vertical offset (px, `<= 0`) applied to card `index`'s content so overflow
/// can be read before the card exits.
///
/// Only the active card scrolls; every other card is reset to 0. During the
/// exit phase the content stays at its fully scrolled position.
pub fn content_offset_y(
    index: usize,
    state: &DeckState,
    content_height: f64,
    viewport_height: f64,
    cfg: &DeckConfig,
) -> f64 {
    if state.total == 0 || index != state.active_index {
        return 0.0;
    }
    let max_scroll = (non_negative(content_height) - non_negative(viewport_height)).max(0.0);
    if max_scroll == 0.0 {
        return 0.0;
    }
    -state.content_phase_progress(cfg) * max_scroll
}

/// Last reported rendered content height per card.
///
/// Hosts push measurements from their size observers; the transform only reads.
/// Missing entries read as 0 (no overflow).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentHeights {
    heights: Vec<f64>,
}

impl ContentHeights {
    pub fn with_cards(total: usize) -> Self {
        Self {
            heights: vec![0.0; total],
        }
    }

    /// Record a measurement. Negative and NaN heights clamp to 0. Indices outside
    /// the deck are ignored. Returns `true` when the stored value changed.
    pub fn report(&mut self, index: usize, height: f64) -> bool {
        let height = non_negative(height);
        let Some(slot) = self.heights.get_mut(index) else {
            return false;
        };
        if *slot == height {
            return false;
        }
        *slot = height;
        true
    }

    pub fn get(&self, index: usize) -> f64 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/content.rs"]
mod tests;
