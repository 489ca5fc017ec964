//! Gate component and its transitional view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a routed page. The view follows a memo over the session revision.
//! The redirect guard follows session writes through a subscription, so a
//! write re-evaluates the gate before `write` returns, and it is torn down
//! with the route's owner.
//!
//! The redirect scheduler and the navigator are read from context when
//! provided. Otherwise the platform timer and the router's `navigate` are
//! used.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use std::rc::Rc;

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::gate::{Gate, GateDecision, RedirectGuard, SharedScheduler};
use crate::state::session::{SessionSignal, use_session};

/// Navigation callback a gate invokes when its redirect fires.
pub type GateNavigate = Rc<dyn Fn(&str)>;

#[derive(Clone, Copy)]
struct SchedulerContext(StoredValue<SharedScheduler, LocalStorage>);

#[derive(Clone, Copy)]
struct NavigateContext(StoredValue<GateNavigate, LocalStorage>);

/// Use `scheduler` for every gate mounted below the current owner.
pub fn provide_redirect_scheduler(scheduler: SharedScheduler) {
    provide_context(SchedulerContext(StoredValue::new_local(scheduler)));
}

/// Route gate redirects below the current owner through `navigate` instead
/// of the router.
pub fn provide_gate_navigate(navigate: impl Fn(&str) + 'static) {
    let navigate: GateNavigate = Rc::new(navigate);
    provide_context(NavigateContext(StoredValue::new_local(navigate)));
}

fn use_redirect_scheduler() -> SharedScheduler {
    use_context::<SchedulerContext>()
        .and_then(|ctx| ctx.0.try_get_value())
        .unwrap_or_else(SharedScheduler::platform)
}

fn use_gate_navigate() -> GateNavigate {
    if let Some(navigate) = use_context::<NavigateContext>().and_then(|ctx| ctx.0.try_get_value()) {
        return navigate;
    }
    let navigate = use_navigate();
    Rc::new(move |target: &str| navigate(target, NavigateOptions::default()))
}

/// Render `children` if `gate` allows the current session; otherwise show
/// the gate's message and navigate to its redirect path after its delay.
#[component]
pub fn RouteGate(gate: Gate, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    follow_session(gate.clone(), &session, use_redirect_scheduler(), use_gate_navigate());

    let decision = Memo::new(move |_| {
        session.track();
        gate.evaluate(session.read().as_deref())
    });

    move || match decision.get() {
        GateDecision::Allow => Either::Left(children()),
        GateDecision::DenyWithRedirect(redirect) => Either::Right(view! { <RedirectNotice message=redirect.message/> }),
    }
}

/// Drive a redirect guard from `session`: once now, then after every write.
/// Cleaning up the current owner drops the subscription and tears the guard
/// down, cancelling a pending redirect.
fn follow_session(gate: Gate, session: &SessionSignal, scheduler: SharedScheduler, navigate: GateNavigate) {
    let guard = StoredValue::new_local(RedirectGuard::new(scheduler));
    let navigate = StoredValue::new_local(navigate);

    let observe = move |token: Option<&str>| {
        let decision = gate.evaluate(token);
        guard.try_update_value(|g| {
            g.observe(&decision, move |target| {
                if let Some(navigate) = navigate.try_get_value() {
                    navigate(target);
                }
            });
        });
    };
    observe(session.read().as_deref());
    let subscription = session.subscribe(observe);

    on_cleanup(move || {
        drop(subscription);
        guard.try_update_value(|g| g.teardown());
    });
}

/// Transitional view shown while a gate redirect is pending.
#[component]
pub fn RedirectNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="redirect-notice" role="status" aria-live="polite">
            <div class="redirect-notice__card">
                <h2 class="redirect-notice__message">{message}</h2>
                <p class="redirect-notice__status">
                    "Redirecting…"
                    <span class="spinner" aria-hidden="true"></span>
                </p>
            </div>
        </div>
    }
}
