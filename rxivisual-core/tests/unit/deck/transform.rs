use super::*;
use crate::deck::config::{
    STACK_GAP_Y, STACK_OPACITY_FLOOR, STACK_OPACITY_STEP, STACK_SCALE_FLOOR, STACK_SCALE_STEP,
};

const EPS: f64 = 1e-9;

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0)
}

fn style(index: usize, total: usize, v: f64) -> CardStyle {
    card_style_at(
        index,
        total,
        ScrollProgress::new(v),
        vp(),
        &DeckConfig::default(),
    )
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "{a} != {b}");
}

#[test]
fn active_index_is_clamped_floor() {
    assert_eq!(active_index(ScrollProgress::new(0.0), 5), 0);
    assert_eq!(active_index(ScrollProgress::new(0.19), 5), 0);
    assert_eq!(active_index(ScrollProgress::new(0.21), 5), 1);
    assert_eq!(active_index(ScrollProgress::new(0.99), 5), 4);
    assert_eq!(active_index(ScrollProgress::new(1.0), 5), 4);
    assert_eq!(active_index(ScrollProgress::new(0.7), 0), 0);
    assert_eq!(active_index(ScrollProgress::new(0.7), 1), 0);
}

#[test]
fn active_index_is_monotonic() {
    for total in 1..=12 {
        let mut last = 0;
        for step in 0..=2000 {
            let a = active_index(ScrollProgress::new(step as f64 / 2000.0), total);
            assert!(a >= last, "total={total} step={step}");
            assert!(a < total);
            last = a;
        }
    }
}

#[test]
fn segment_start_is_right_open() {
    let cfg = DeckConfig::default();
    let s = DeckState::at(ScrollProgress::new(0.5), 4, &cfg);
    assert_eq!(s.active_index, 2);
    assert_eq!(s.local_progress, 0.0);
    assert_eq!(s.exit_progress, 0.0);
    assert_eq!(s.phase(2), CardPhase::Reading);
}

#[test]
fn normalized_progress_guards_small_decks() {
    assert_eq!(normalized_progress(0, 0), 0.0);
    assert_eq!(normalized_progress(0, 1), 0.0);
    assert_eq!(normalized_progress(2, 5), 0.5);
    assert_eq!(normalized_progress(4, 5), 1.0);
}

#[test]
fn start_of_deck_has_card_zero_at_rest() {
    let s = style(0, 5, 0.0);
    assert_eq!(s.offset_x, 0.0);
    assert_eq!(s.offset_y, 0.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.rotation_deg, 0.0);
    assert_eq!(s.stack_order, 5);
}

#[test]
fn content_phase_has_no_exit() {
    let state = DeckState::at(ScrollProgress::new(0.1), 5, &DeckConfig::default());
    assert_eq!(state.active_index, 0);
    assert_eq!(state.exit_progress, 0.0);
    assert_eq!(state.phase(0), CardPhase::Reading);
    assert_eq!(style(0, 5, 0.1), style(0, 5, 0.0));
}

#[test]
fn exit_phase_ramps_opacity_and_offset() {
    let cfg = DeckConfig::default();
    let state = DeckState::at(ScrollProgress::new(0.19), 5, &cfg);
    assert_eq!(state.active_index, 0);
    assert!((state.exit_progress - 0.8).abs() < 1e-6);
    assert_eq!(state.phase(0), CardPhase::Exiting);

    let s = card_style(0, &state, vp(), &cfg);
    assert!((s.opacity - 0.2).abs() < 1e-6);
    assert!((s.offset_x - (-1.1 * 1000.0 * 0.8)).abs() < 1e-3);
    assert!(s.offset_x < -800.0);
    assert!((s.rotation_deg - (-3.0 * 0.8)).abs() < 1e-6);
    assert!((s.scale - 0.96).abs() < 1e-6);
    assert_eq!(s.stack_order, 6);
}

#[test]
fn queued_card_two_behind_uses_stack_steps() {
    let s = style(2, 5, 0.0);
    assert_close(s.offset_y, 2.0 * STACK_GAP_Y);
    assert_close(s.scale, (1.0 - 2.0 * STACK_SCALE_STEP).max(STACK_SCALE_FLOOR));
    assert_close(
        s.opacity,
        (1.0 - 2.0 * STACK_OPACITY_STEP).max(STACK_OPACITY_FLOOR),
    );
    assert_eq!(s.offset_x, 0.0);
    assert_eq!(s.rotation_deg, 0.0);
    assert_eq!(s.stack_order, 3);
}

#[test]
fn deep_queue_hits_floors() {
    let s = style(9, 10, 0.0);
    assert_eq!(s.scale, STACK_SCALE_FLOOR);
    assert_eq!(s.opacity, STACK_OPACITY_FLOOR);
}

#[test]
fn queued_cards_glide_forward_during_exit() {
    let cfg = DeckConfig::default();
    let state = DeckState::at(ScrollProgress::new(0.19), 5, &cfg);
    let s = card_style(1, &state, vp(), &cfg);
    let e = state.exit_progress;
    assert_close(s.offset_y, (1.0 - e) * STACK_GAP_Y);
    assert_close(s.scale, 1.0 - (1.0 - e) * STACK_SCALE_STEP);
}

#[test]
fn exited_cards_are_transparent_and_lowest() {
    let s = style(0, 5, 0.5);
    assert_eq!(s.opacity, 0.0);
    assert_close(s.offset_x, -1100.0);
    assert_eq!(s.offset_y, 0.0);
    assert_eq!(s.rotation_deg, 0.0);
    assert!(s.stack_order < 0);
    for queued in 3..5 {
        assert!(style(queued, 5, 0.5).stack_order > s.stack_order);
    }
}

#[test]
fn end_of_track_leaves_no_limbo() {
    let cfg = DeckConfig::default();
    let state = DeckState::at(ScrollProgress::END, 5, &cfg);
    assert_eq!(state.active_index, 4);
    assert_eq!(state.exit_progress, 1.0);
    for i in 0..5 {
        assert_eq!(state.phase(i), CardPhase::Exited, "card {i}");
        let s = card_style(i, &state, vp(), &cfg);
        assert_eq!(s.opacity, 0.0);
        assert_close(s.offset_x, -1100.0);
        assert_eq!(s.offset_y, 0.0);
    }
}

#[test]
fn every_output_is_finite_and_partitioned() {
    let cfg = DeckConfig::default();
    for total in 1..=7 {
        for step in 0..=500 {
            let state = DeckState::at(ScrollProgress::new(step as f64 / 500.0), total, &cfg);
            let mut active = 0;
            for i in 0..total {
                let s = card_style(i, &state, vp(), &cfg);
                for x in [s.offset_x, s.offset_y, s.scale, s.opacity, s.rotation_deg] {
                    assert!(x.is_finite());
                }
                assert!((0.0..=1.0).contains(&s.opacity));
                let pos = state.raw_deck_pos(i);
                if pos == 0 {
                    active += 1;
                } else if pos > 0 {
                    assert!(s.scale >= STACK_SCALE_FLOOR);
                    assert_eq!(state.phase(i), CardPhase::Queued);
                } else {
                    assert_eq!(s.opacity, 0.0);
                }
            }
            assert_eq!(active, 1);
        }
    }
}

#[test]
fn handoff_is_continuous() {
    // Just before the boundary, the next card is almost in the active pose and
    // the exiting card is almost in the exited pose.
    let before_next = style(2, 5, 0.4 - 1e-9);
    let after_next = style(2, 5, 0.4);
    assert!((before_next.offset_y - after_next.offset_y).abs() < 1e-4);
    assert!((before_next.scale - after_next.scale).abs() < 1e-6);
    assert!((before_next.opacity - after_next.opacity).abs() < 1e-6);

    let before_prev = style(1, 5, 0.4 - 1e-9);
    let after_prev = style(1, 5, 0.4);
    assert!((before_prev.opacity - after_prev.opacity).abs() < 1e-6);
    assert!((before_prev.offset_x - after_prev.offset_x).abs() < 1e-3);
}

#[test]
fn is_idempotent_and_reversible() {
    let mut prev: Option<Vec<CardStyle>> = None;
    for step in (0..=1000).rev() {
        let v = step as f64 / 1000.0;
        let now: Vec<_> = (0..5).map(|i| style(i, 5, v)).collect();
        let again: Vec<_> = (0..5).map(|i| style(i, 5, v)).collect();
        assert_eq!(now, again);
        if let Some(prev) = prev {
            for (a, b) in prev.iter().zip(&now) {
                // One scroll tick back never jumps more than one tick's worth of exit.
                assert!((a.opacity - b.opacity).abs() <= 0.021);
                assert!((a.offset_x - b.offset_x).abs() <= 23.0);
            }
        }
        prev = Some(now);
    }
}

#[test]
fn empty_deck_is_a_noop() {
    let cfg = DeckConfig::default();
    let state = DeckState::at(ScrollProgress::new(0.3), 0, &cfg);
    assert_eq!(state.active_index, 0);
    assert_eq!(state.exit_progress, 0.0);
}

#[test]
fn eased_exit_keeps_endpoints() {
    let cfg = DeckConfig {
        exit_ease: crate::Ease::InOutCubic,
        ..DeckConfig::default()
    };
    let mid = DeckState::at(ScrollProgress::new(0.19), 5, &cfg);
    let s = card_style(0, &mid, vp(), &cfg);
    assert!(s.opacity < 0.2);
    let end = DeckState::at(ScrollProgress::new(0.2 - 1e-12), 5, &cfg);
    assert!(card_style(0, &end, vp(), &cfg).opacity < 1e-6);
}

#[test]
fn affine_is_identity_at_rest() {
    let s = style(0, 3, 0.0);
    assert_eq!(s.to_affine(Point::new(50.0, 50.0)), Affine::IDENTITY);

    let exited = style(0, 3, 0.9);
    let moved = exited.to_affine(Point::new(0.0, 0.0)) * Point::new(0.0, 0.0);
    assert!((moved.x - (-1100.0)).abs() < 1e-9);
}
