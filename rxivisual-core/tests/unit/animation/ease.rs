use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::InOutCubic];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut last = 0.0;
        for step in 0..=100 {
            let y = ease.apply(step as f64 / 100.0);
            assert!(y >= last, "{ease:?} at {step}");
            last = y;
        }
    }
}

#[test]
fn in_out_cubic_is_symmetric_about_midpoint() {
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
    let a = Ease::InOutCubic.apply(0.2);
    let b = Ease::InOutCubic.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-12);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::OutQuad.apply(2.0), 1.0);
    assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
}

#[test]
fn parses_snake_case_names() {
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
    assert!(serde_json::from_str::<Ease>("\"in_quad\"").is_err());
    assert_eq!(Ease::default(), Ease::Linear);
}
