use crate::{
    animation::spring::{ScrollSpring, SpringParams},
    deck::{
        active::{ActiveChange, ActiveIndexTracker, DeckListener},
        config::DeckConfig,
        content::{ContentHeights, content_offset_y},
        track::{progress_from_offset, track_height_px},
        transform::{CardPhase, CardStyle, DeckState, card_style, normalized_progress},
    },
    foundation::core::{ScrollProgress, Viewport},
    foundation::error::RxivisualResult,
};

/// One card's evaluated output.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CardFrame {
    pub index: usize,
    pub phase: CardPhase,
    pub style: CardStyle,
    /// Inner content offset in px (`<= 0`).
    pub content_offset_y: f64,
}

/// Evaluated deck at one scroll position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DeckFrame {
    pub progress: f64,
    pub active_index: usize,
    pub exit_progress: f64,
    pub normalized_progress: f64,
    pub cards: Vec<CardFrame>,
}

/// Evaluate every card of a deck at `progress`. Pure; no session state involved.
pub fn evaluate_deck(
    progress: ScrollProgress,
    total: usize,
    viewport: Viewport,
    heights: &ContentHeights,
    cfg: &DeckConfig,
) -> DeckFrame {
    let state = DeckState::at(progress, total, cfg);
    let cards = (0..total)
        .map(|index| CardFrame {
            index,
            phase: state.phase(index),
            style: card_style(index, &state, viewport, cfg),
            content_offset_y: content_offset_y(
                index,
                &state,
                heights.get(index),
                viewport.height,
                cfg,
            ),
        })
        .collect();

    DeckFrame {
        progress: state.progress,
        active_index: state.active_index,
        exit_progress: state.exit_progress,
        normalized_progress: normalized_progress(state.active_index, total),
        cards,
    }
}

/// Host-facing driver for one deck on one page.
///
/// Owns the inputs the transform reads (viewport, content heights, progress)
/// and fans active-card changes out to listeners. Dropping the session drops
/// every listener.
pub struct DeckSession {
    total: usize,
    cfg: DeckConfig,
    viewport: Viewport,
    heights: ContentHeights,
    tracker: ActiveIndexTracker,
    spring: Option<ScrollSpring>,
    target: ScrollProgress,
    progress: ScrollProgress,
    listeners: Vec<Box<dyn DeckListener>>,
}

impl std::fmt::Debug for DeckSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckSession")
            .field("total", &self.total)
            .field("viewport", &self.viewport)
            .field("progress", &self.progress)
            .field("target", &self.target)
            .field("smoothed", &self.spring.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DeckSession {
    pub fn new(total: usize, cfg: DeckConfig, viewport: Viewport) -> RxivisualResult<Self> {
        cfg.validate()?;
        Ok(Self {
            total,
            cfg,
            viewport: Viewport::new(viewport.width, viewport.height),
            heights: ContentHeights::with_cards(total),
            tracker: ActiveIndexTracker::new(total),
            spring: None,
            target: ScrollProgress::START,
            progress: ScrollProgress::START,
            listeners: Vec::new(),
        })
    }

    /// Enable spring smoothing of incoming progress; [`DeckSession::tick`] then advances it.
    pub fn with_spring(mut self, params: SpringParams) -> Self {
        self.spring = Some(ScrollSpring::new(params, self.progress.get()));
        self
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn config(&self) -> &DeckConfig {
        &self.cfg
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Progress the transform currently evaluates (smoothed when a spring is set).
    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tracker.current()
    }

    pub fn add_listener(&mut self, listener: impl DeckListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Viewport::new(viewport.width, viewport.height);
    }

    pub fn report_content_height(&mut self, index: usize, height: f64) {
        if index >= self.total {
            tracing::warn!(index, total = self.total, "content height for unknown card");
            return;
        }
        if self.heights.report(index, height) {
            tracing::trace!(index, height, "content height updated");
        }
    }

    pub fn content_heights(&self) -> &ContentHeights {
        &self.heights
    }

    /// Scroll track height in px for the current viewport.
    pub fn track_height_px(&self) -> f64 {
        track_height_px(self.total, self.viewport.height, &self.cfg)
    }

    /// Feed a raw pixel scroll offset within the track.
    pub fn scroll_to_offset(&mut self, scroll_top: f64) -> Option<ActiveChange> {
        let v = progress_from_offset(scroll_top, self.track_height_px(), self.viewport.height);
        self.scroll_to(ScrollProgress::new(v))
    }

    /// Feed a new target progress. Without a spring it takes effect immediately.
    #[tracing::instrument(level = "trace", skip(self), fields(total = self.total))]
    pub fn scroll_to(&mut self, progress: ScrollProgress) -> Option<ActiveChange> {
        self.target = progress;
        if self.spring.is_some() {
            return None;
        }
        self.apply(progress)
    }

    /// Advance spring smoothing by `dt_secs`. Without a spring this is a no-op.
    pub fn tick(&mut self, dt_secs: f64) -> Option<ActiveChange> {
        let target = self.target.get();
        let v = self.spring.as_mut()?.step(target, dt_secs);
        self.apply(ScrollProgress::new(v))
    }

    /// Evaluate every card at the current progress.
    pub fn frame(&self) -> DeckFrame {
        evaluate_deck(
            self.progress,
            self.total,
            self.viewport,
            &self.heights,
            &self.cfg,
        )
    }

    fn apply(&mut self, progress: ScrollProgress) -> Option<ActiveChange> {
        self.progress = progress;
        let change = self.tracker.update(progress)?;
        tracing::debug!(
            previous = ?change.previous,
            current = change.current,
            normalized = change.normalized,
            "active card changed"
        );
        for listener in &mut self.listeners {
            listener.on_active_change(&change);
        }
        Some(change)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/session.rs"]
mod tests;
