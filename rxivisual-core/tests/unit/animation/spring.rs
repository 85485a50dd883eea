use super::*;

#[test]
fn converges_to_target_and_rests() {
    let mut s = ScrollSpring::new(SpringParams::default(), 0.0);
    for _ in 0..600 {
        s.step(0.6, 1.0 / 60.0);
    }
    assert_eq!(s.position(), 0.6);
    assert_eq!(s.velocity(), 0.0);
    assert!(s.is_at_rest(0.6));
}

#[test]
fn default_params_do_not_overshoot_much() {
    let mut s = ScrollSpring::new(SpringParams::default(), 0.0);
    let mut max_seen: f64 = 0.0;
    for _ in 0..300 {
        max_seen = max_seen.max(s.step(1.0, 1.0 / 60.0));
    }
    assert!(max_seen <= 1.0 + 1e-3, "overshoot {max_seen}");
}

#[test]
fn replay_is_deterministic() {
    let run = || {
        let mut s = ScrollSpring::new(SpringParams::default(), 0.2);
        let mut out = Vec::new();
        for (i, target) in [0.3, 0.5, 0.5, 0.1, 0.9].iter().enumerate() {
            out.push(s.step(*target, 0.01 * (i + 1) as f64));
        }
        out
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_or_invalid_dt_is_noop() {
    let mut s = ScrollSpring::new(SpringParams::default(), 0.4);
    assert_eq!(s.step(1.0, 0.0), 0.4);
    assert_eq!(s.step(1.0, -1.0), 0.4);
    assert_eq!(s.step(1.0, f64::NAN), 0.4);
}
