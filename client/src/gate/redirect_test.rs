use super::*;
use crate::gate::policy::{Gate, Redirect};
use crate::gate::testing::{ManualScheduler, Navigations};
use std::time::Duration;

// =============================================================
// Helpers
// =============================================================

fn denied(target: &str) -> GateDecision {
    GateDecision::DenyWithRedirect(Redirect {
        target: target.to_owned(),
        delay: Duration::from_millis(1500),
        message: "go away".to_owned(),
    })
}

fn guard() -> (RedirectGuard<ManualScheduler>, ManualScheduler, Navigations) {
    let clock = ManualScheduler::default();
    (RedirectGuard::new(clock.clone()), clock, Navigations::default())
}

// =============================================================
// Timing
// =============================================================

#[test]
fn allow_arms_nothing() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&GateDecision::Allow, nav.navigator());
    assert!(!guard.is_armed());
    clock.advance_ms(10_000);
    assert!(nav.paths().is_empty());
}

#[test]
fn denial_navigates_once_after_delay() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/signin"), nav.navigator());
    assert!(guard.is_armed());

    clock.advance_ms(1499);
    assert!(nav.paths().is_empty());

    clock.advance_ms(1);
    assert_eq!(nav.paths(), vec!["/signin"]);

    clock.advance_ms(10_000);
    assert_eq!(nav.paths(), vec!["/signin"]);
}

#[test]
fn delay_comes_from_the_decision() {
    let (mut guard, clock, nav) = guard();
    let decision = Gate::require_session("/signin").with_delay(Duration::from_millis(200)).evaluate(None);
    guard.observe(&decision, nav.navigator());
    clock.advance_ms(199);
    assert!(nav.paths().is_empty());
    clock.advance_ms(1);
    assert_eq!(nav.paths(), vec!["/signin"]);
}

// =============================================================
// Idempotent re-render
// =============================================================

#[test]
fn repeated_identical_denial_does_not_rearm() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/signin"), nav.navigator());
    clock.advance_ms(700);
    guard.observe(&denied("/signin"), nav.navigator());
    guard.observe(&denied("/signin"), nav.navigator());
    assert_eq!(clock.pending(), 1);

    // The first deadline still holds.
    clock.advance_ms(800);
    assert_eq!(nav.paths(), vec!["/signin"]);
    clock.advance_ms(5000);
    assert_eq!(nav.paths().len(), 1);
}

#[test]
fn same_denial_after_fire_does_not_rearm() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/"), nav.navigator());
    clock.advance_ms(1500);
    guard.observe(&denied("/"), nav.navigator());
    clock.advance_ms(1500);
    assert_eq!(nav.paths(), vec!["/"]);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn teardown_before_deadline_cancels() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/signin"), nav.navigator());
    clock.advance_ms(500);
    guard.teardown();
    assert!(!guard.is_armed());
    clock.advance_ms(5000);
    assert!(nav.paths().is_empty());
}

#[test]
fn dropping_the_guard_cancels() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/signin"), nav.navigator());
    drop(guard);
    clock.advance_ms(5000);
    assert!(nav.paths().is_empty());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn observations_after_teardown_are_ignored() {
    let (mut guard, clock, nav) = guard();
    guard.teardown();
    guard.observe(&denied("/signin"), nav.navigator());
    clock.advance_ms(5000);
    assert!(nav.paths().is_empty());
}

#[test]
fn transition_to_allow_cancels_pending_redirect() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/signin"), nav.navigator());
    clock.advance_ms(1000);
    guard.observe(&GateDecision::Allow, nav.navigator());
    assert!(!guard.is_armed());
    clock.advance_ms(5000);
    assert!(nav.paths().is_empty());
}

#[test]
fn reentering_denied_state_arms_a_fresh_timer() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/signin"), nav.navigator());
    clock.advance_ms(1000);
    guard.observe(&GateDecision::Allow, nav.navigator());
    guard.observe(&denied("/signin"), nav.navigator());

    // Full delay measured from re-entry.
    clock.advance_ms(1000);
    assert!(nav.paths().is_empty());
    clock.advance_ms(500);
    assert_eq!(nav.paths(), vec!["/signin"]);
}

#[test]
fn switching_redirect_target_replaces_the_timer() {
    let (mut guard, clock, nav) = guard();
    guard.observe(&denied("/signin"), nav.navigator());
    clock.advance_ms(200);
    guard.observe(&denied("/"), nav.navigator());
    assert_eq!(clock.pending(), 1);
    clock.advance_ms(1500);
    assert_eq!(nav.paths(), vec!["/"]);
}
