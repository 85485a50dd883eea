//! Rxivisual turns a paper's sections into a scroll-driven deck of cards.
//!
//! This crate is the deck engine: a pure mapping from one scalar, the scroll
//! progress through the deck's track, to the visual state of every card.
//!
//! # Pipeline overview
//!
//! 1. **Track**: host scroll offset in px -> [`ScrollProgress`] in `[0, 1]`
//! 2. **Smooth** (optional): [`ScrollSpring`] follows the raw progress
//! 3. **Evaluate**: `ScrollProgress + N` -> [`DeckState`] -> [`CardStyle`] per card
//! 4. **Report**: [`ActiveIndexTracker`] emits edge-triggered [`ActiveChange`]s
//!
//! [`DeckSession`] wires these stages together for a host; the free functions
//! ([`card_style_at`], [`evaluate_deck`], [`content_offset_y`]) are usable on
//! their own from any render loop.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless in progress**: the same progress always yields bit-identical
//!   styles, so scrolling back up exactly reverses the animation.
//! - **Infallible transform**: out-of-range inputs are clamped, never reported.
#![forbid(unsafe_code)]

mod animation;
mod deck;
mod foundation;
mod paper;

pub use animation::ease::Ease;
pub use animation::spring::{ScrollSpring, SpringParams};
pub use deck::active::{ActiveChange, ActiveIndexTracker, DeckListener};
pub use deck::config::{
    DeckConfig, EXIT_DISTANCE, EXIT_ROTATION_DEG, EXIT_SCALE_END, EXIT_THRESHOLD,
    SCROLL_PER_SECTION, STACK_GAP_Y, STACK_OPACITY_FLOOR, STACK_OPACITY_STEP, STACK_SCALE_FLOOR,
    STACK_SCALE_STEP,
};
pub use deck::content::{ContentHeights, content_offset_y};
pub use deck::session::{CardFrame, DeckFrame, DeckSession, evaluate_deck};
pub use deck::track::{
    offset_for_card, offset_for_progress, progress_from_offset, track_height_px, track_height_vh,
};
pub use deck::transform::{
    CardPhase, CardStyle, DeckState, active_index, card_style, card_style_at, normalized_progress,
};
pub use foundation::core::{Affine, Point, ScrollProgress, Vec2, Viewport};
pub use foundation::error::{RxivisualError, RxivisualResult};
pub use paper::outline::{PaperOutline, Section};
