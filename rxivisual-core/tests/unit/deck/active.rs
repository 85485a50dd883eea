use super::*;

#[test]
fn reports_only_on_transitions() {
    let mut t = ActiveIndexTracker::new(5);
    let first = t.update(ScrollProgress::new(0.0)).unwrap();
    assert_eq!(first.previous, None);
    assert_eq!(first.current, 0);
    assert_eq!(first.normalized, 0.0);

    assert!(t.update(ScrollProgress::new(0.05)).is_none());
    assert!(t.update(ScrollProgress::new(0.19)).is_none());

    let next = t.update(ScrollProgress::new(0.5)).unwrap();
    assert_eq!(next.previous, Some(0));
    assert_eq!(next.current, 2);
    assert_eq!(next.normalized, 0.5);
    assert_eq!(t.current(), Some(2));
}

#[test]
fn scrolling_back_reports_decreases() {
    let mut t = ActiveIndexTracker::new(4);
    t.update(ScrollProgress::END);
    let back = t.update(ScrollProgress::new(0.3)).unwrap();
    assert_eq!(back.previous, Some(3));
    assert_eq!(back.current, 1);
}

#[test]
fn empty_deck_never_reports_and_reset_refires() {
    let mut empty = ActiveIndexTracker::new(0);
    assert!(empty.update(ScrollProgress::new(0.5)).is_none());

    let mut t = ActiveIndexTracker::new(3);
    t.update(ScrollProgress::new(0.1));
    t.reset();
    assert!(t.update(ScrollProgress::new(0.1)).is_some());
}

#[test]
fn closures_are_listeners() {
    let mut seen = Vec::new();
    {
        let mut l = |c: &ActiveChange| seen.push(c.current);
        let change = ActiveChange {
            previous: None,
            current: 3,
            normalized: 1.0,
        };
        l.on_active_change(&change);
    }
    assert_eq!(seen, vec![3]);
}
