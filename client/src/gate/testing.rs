//! Virtual-time scheduler, recording navigator, and a harness that mounts
//! the real gate component under a reactive owner.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use super::policy::Gate;
use super::scheduler::{RedirectScheduler, SharedScheduler};
use crate::components::route_gate::{RouteGate, provide_gate_navigate, provide_redirect_scheduler};
use crate::state::session::SessionSignal;

struct Entry {
    due: Duration,
    cancelled: Rc<Cell<bool>>,
    fire: Option<Box<dyn FnOnce()>>,
}

/// Scheduler driven by `advance`; nothing fires until time is moved forward.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    entries: Rc<RefCell<Vec<Entry>>>,
}

/// Pending handle; dropping it cancels the entry.
pub(crate) struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub(crate) fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);
        // Collect first so a callback may schedule again without a borrow conflict.
        let due: Vec<Box<dyn FnOnce()>> = {
            let mut entries = self.entries.borrow_mut();
            let mut due = Vec::new();
            for entry in entries.iter_mut() {
                if entry.due <= now && !entry.cancelled.get() {
                    if let Some(fire) = entry.fire.take() {
                        due.push(fire);
                    }
                }
            }
            entries.retain(|e| e.fire.is_some() && !e.cancelled.get());
            due
        };
        for fire in due {
            fire();
        }
    }

    pub(crate) fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Timers armed and neither fired nor cancelled.
    pub(crate) fn pending(&self) -> usize {
        self.entries.borrow().iter().filter(|e| e.fire.is_some() && !e.cancelled.get()).count()
    }
}

impl RedirectScheduler for ManualScheduler {
    type Pending = ManualTimer;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> ManualTimer {
        let cancelled = Rc::new(Cell::new(false));
        self.entries.borrow_mut().push(Entry {
            due: self.now.get() + delay,
            cancelled: cancelled.clone(),
            fire: Some(fire),
        });
        ManualTimer { cancelled }
    }
}

/// Records every navigation request.
#[derive(Clone, Default)]
pub(crate) struct Navigations(Rc<RefCell<Vec<String>>>);

impl Navigations {
    pub(crate) fn navigator(&self) -> impl FnOnce(&str) + 'static {
        let log = self.0.clone();
        move |path: &str| log.borrow_mut().push(path.to_owned())
    }

    /// Reusable form of `navigator` for context injection.
    pub(crate) fn recorder(&self) -> impl Fn(&str) + 'static {
        let log = self.0.clone();
        move |path: &str| log.borrow_mut().push(path.to_owned())
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// A `RouteGate` mounted under its own owner, with virtual time and
/// recorded navigation.
pub(crate) struct MountedGate {
    pub(crate) owner: Owner,
    pub(crate) clock: ManualScheduler,
    pub(crate) nav: Navigations,
}

impl MountedGate {
    pub(crate) fn mount(gate: Gate, session: &SessionSignal) -> Self {
        let clock = ManualScheduler::default();
        let nav = Navigations::default();
        let owner = Owner::new();
        owner.with(|| {
            provide_context(session.clone());
            provide_redirect_scheduler(SharedScheduler::new(clock.clone()));
            provide_gate_navigate(nav.recorder());
            let _view = view! { <RouteGate gate=gate>"page content"</RouteGate> };
        });
        Self { owner, clock, nav }
    }

    /// Unmount: runs the owner's cleanups.
    pub(crate) fn unmount(&self) {
        self.owner.cleanup();
    }
}
