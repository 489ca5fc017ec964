//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` talks to the hosted identity provider, `jobs` to the resume
//! matching service and `profile` to the document store holding user
//! profiles. `types` defines their wire schemas.

pub mod identity;
pub mod jobs;
pub mod profile;
pub mod types;

/// Minimal executor: the service calls never suspend outside the browser build.
#[cfg(all(test, not(feature = "csr")))]
pub(crate) fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended unexpectedly"),
    }
}
