//! One-shot timers for gate redirects.
//!
//! `schedule` returns a pending handle; dropping the handle cancels the timer.
//! The browser build uses `gloo-timers`. Other builds get an inert scheduler
//! that never fires, since there is no router to navigate outside a browser.
//! `SharedScheduler` erases the concrete scheduler so the gate component can
//! pick one up from context.

use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Arms one-shot callbacks. Dropping the returned handle must cancel the
/// callback if it has not fired yet.
pub trait RedirectScheduler {
    type Pending;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Pending;
}

#[cfg(feature = "csr")]
pub type PlatformScheduler = BrowserScheduler;
#[cfg(not(feature = "csr"))]
pub type PlatformScheduler = InertScheduler;

/// `setTimeout`-backed scheduler.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "csr")]
impl RedirectScheduler for BrowserScheduler {
    type Pending = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Pending {
        gloo_timers::callback::Timeout::new(timeout_millis(delay), fire)
    }
}

/// Delay in whole milliseconds, capped at what `setTimeout` honours.
/// Larger values would be treated as zero by the browser.
pub fn timeout_millis(delay: Duration) -> u32 {
    let max = crate::util::config::MAX_REDIRECT_DELAY_MS;
    u32::try_from(delay.as_millis().min(u128::from(max))).unwrap_or(u32::MAX)
}

/// Scheduler for builds without a browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertScheduler;

impl RedirectScheduler for InertScheduler {
    type Pending = ();

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Pending {
        log::debug!("redirect after {delay:?} dropped: no event loop");
        drop(fire);
    }
}

type ScheduleFn = dyn Fn(Duration, Box<dyn FnOnce()>) -> Box<dyn Any>;

/// Any scheduler behind a cloneable handle. The pending handle is boxed;
/// dropping the box drops the concrete handle and cancels the timer.
#[derive(Clone)]
pub struct SharedScheduler(Rc<ScheduleFn>);

impl SharedScheduler {
    pub fn new<S>(scheduler: S) -> Self
    where
        S: RedirectScheduler + 'static,
        S::Pending: 'static,
    {
        Self(Rc::new(move |delay: Duration, fire: Box<dyn FnOnce()>| -> Box<dyn Any> {
            Box::new(scheduler.schedule(delay, fire))
        }))
    }

    /// The scheduler for the current build target.
    pub fn platform() -> Self {
        Self::new(PlatformScheduler::default())
    }
}

impl RedirectScheduler for SharedScheduler {
    type Pending = Box<dyn Any>;

    fn schedule(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> Self::Pending {
        (self.0)(delay, fire)
    }
}
