//! Route access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router wraps restricted pages in a gate. Per evaluation the gate reads
//! the session signal and either lets the page render or replaces it with a
//! transitional view and navigates elsewhere after a fixed delay.
//!
//! `policy` holds the pure decision, `redirect` owns the one-shot redirect
//! timer lifecycle, and `scheduler` abstracts the timer so the lifecycle can
//! be driven in virtual time.

pub mod policy;
pub mod redirect;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;

pub use policy::{Gate, GateDecision, GatePolicy, Redirect, RouteAccess};
pub use redirect::RedirectGuard;
pub use scheduler::{PlatformScheduler, RedirectScheduler, SharedScheduler};
