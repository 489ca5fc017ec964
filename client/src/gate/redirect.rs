//! Redirect timer lifecycle for a mounted gate.
//!
//! DESIGN
//! ======
//! The guard remembers the last decision it observed. A timer is armed only
//! on a transition into a denied state; observing the same denial again is a
//! no-op even after the timer has fired. Leaving the denied state, switching
//! to a different redirect, tearing down, or dropping the guard cancels the
//! pending timer.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use super::policy::GateDecision;
use super::scheduler::RedirectScheduler;

pub struct RedirectGuard<S: RedirectScheduler> {
    scheduler: S,
    last: Option<GateDecision>,
    pending: Option<S::Pending>,
    closed: bool,
}

impl<S: RedirectScheduler> RedirectGuard<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, last: None, pending: None, closed: false }
    }

    /// Feed the latest decision. `navigate` is only invoked if this call arms
    /// a timer and that timer later fires.
    pub fn observe<N>(&mut self, decision: &GateDecision, navigate: N)
    where
        N: FnOnce(&str) + 'static,
    {
        if self.closed || self.last.as_ref() == Some(decision) {
            return;
        }
        self.last = Some(decision.clone());
        if self.pending.take().is_some() {
            log::debug!("pending gate redirect cancelled");
        }

        if let GateDecision::DenyWithRedirect(redirect) = decision {
            let target = redirect.target.clone();
            log::info!("gate denied; redirecting to {target} in {:?}", redirect.delay);
            let fire = Box::new(move || navigate(&target));
            self.pending = Some(self.scheduler.schedule(redirect.delay, fire));
        }
    }

    /// Whether a timer was armed and has not been cancelled. A timer that
    /// already fired still counts until the guard observes a new state.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel any pending redirect and ignore later observations. Called when
    /// the host unmounts.
    pub fn teardown(&mut self) {
        self.closed = true;
        if self.pending.take().is_some() {
            log::debug!("gate torn down; pending redirect cancelled");
        }
    }
}
