use crate::{
    deck::transform::{active_index, normalized_progress},
    foundation::core::ScrollProgress,
};

/// Emitted when the active card changes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ActiveChange {
    /// `None` on the first report.
    pub previous: Option<usize>,
    pub current: usize,
    /// `current / (N - 1)`, or 0 for decks of at most one card.
    pub normalized: f64,
}

/// Subscriber for deck-level events.
pub trait DeckListener {
    fn on_active_change(&mut self, change: &ActiveChange);
}

impl<F> DeckListener for F
where
    F: FnMut(&ActiveChange),
{
    fn on_active_change(&mut self, change: &ActiveChange) {
        self(change)
    }
}

/// Edge-triggered active index: reports only when the value transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveIndexTracker {
    total: usize,
    last: Option<usize>,
}

impl ActiveIndexTracker {
    pub fn new(total: usize) -> Self {
        Self { total, last: None }
    }

    pub fn current(&self) -> Option<usize> {
        self.last
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Feed a new progress sample. The first sample always reports; later ones
    /// only when the active index differs from the last report. Empty decks never report.
    pub fn update(&mut self, progress: ScrollProgress) -> Option<ActiveChange> {
        if self.total == 0 {
            return None;
        }
        let current = active_index(progress, self.total);
        if self.last == Some(current) {
            return None;
        }
        let change = ActiveChange {
            previous: self.last,
            current,
            normalized: normalized_progress(current, self.total),
        };
        self.last = Some(current);
        Some(change)
    }

    /// Forget the last report so the next update fires again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/active.rs"]
mod tests;
