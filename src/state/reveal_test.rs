use super::*;

#[test]
fn plan_without_targets_does_nothing() {
    assert_eq!(RevealPlan::choose(true, 0, 0.16), RevealPlan::Nothing);
    assert_eq!(RevealPlan::choose(false, 0, 0.16), RevealPlan::Nothing);
}

#[test]
fn plan_observes_when_supported() {
    assert_eq!(RevealPlan::choose(true, 3, 0.16), RevealPlan::Observe { threshold: 0.16 });
}

#[test]
fn plan_falls_back_to_reveal_all() {
    assert_eq!(RevealPlan::choose(false, 3, 0.16), RevealPlan::RevealAll);
}

#[test]
fn tracker_reveals_once_on_first_intersection() {
    let mut tracker = RevealTracker::new(2);
    assert!(!tracker.report(0, false));
    assert!(tracker.report(0, true));
    assert!(!tracker.report(0, true));
    assert!(!tracker.report(0, false));
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_revealed(1));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn tracker_ignores_unknown_index() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.report(5, true));
    assert!(!tracker.is_revealed(5));
}
