use super::*;

#[test]
fn timeout_millis_passes_ordinary_delays_through() {
    assert_eq!(timeout_millis(Duration::from_millis(1500)), 1500);
    assert_eq!(timeout_millis(Duration::ZERO), 0);
}

#[test]
fn timeout_millis_caps_at_browser_timer_limit() {
    let max = u32::try_from(i32::MAX).unwrap();
    assert_eq!(timeout_millis(Duration::from_millis(u64::from(max))), max);
    assert_eq!(timeout_millis(Duration::from_millis(u64::from(max) + 1)), max);
    assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), max);
}

#[test]
fn inert_scheduler_never_runs_the_callback() {
    let ran = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = ran.clone();
    InertScheduler.schedule(Duration::ZERO, Box::new(move || flag.set(true)));
    assert!(!ran.get());
}

#[test]
fn shared_scheduler_forwards_and_cancels_on_drop() {
    use crate::gate::testing::ManualScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    let clock = ManualScheduler::default();
    let shared = SharedScheduler::new(clock.clone());
    let fired = Rc::new(Cell::new(0));

    let counter = fired.clone();
    let kept = shared.schedule(Duration::from_millis(100), Box::new(move || counter.set(counter.get() + 1)));
    let counter = fired.clone();
    let dropped = shared.schedule(Duration::from_millis(100), Box::new(move || counter.set(counter.get() + 10)));
    assert_eq!(clock.pending(), 2);

    drop(dropped);
    clock.advance_ms(100);
    assert_eq!(fired.get(), 1);
    drop(kept);
}
