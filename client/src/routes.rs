//! Route table and gate composition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router asks this module how each path is classified and which gate to
//! wrap around its page. Gates know nothing about paths; the redirect target,
//! delay and message are supplied here when the route table is built.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::route_gate::RouteGate;
use crate::gate::{Gate, GatePolicy, RouteAccess};
use crate::util::config::AppConfig;

pub mod paths {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
    pub const SIGN_IN: &str = "/signin";
    pub const SIGN_UP: &str = "/signup";
    pub const PROFILE: &str = "/profile";
    pub const PROFILE_EDIT: &str = "/profile/edit";
    pub const JOBS: &str = "/jobs";
    pub const DASHBOARD: &str = "/dashboard";
    pub const MARKET_REPORT: &str = "/dashboard/report";
    pub const LOGOUT: &str = "/logout";
}

/// One row of the static route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub access: RouteAccess,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: paths::HOME, access: RouteAccess::Public },
    RouteEntry { path: paths::ABOUT, access: RouteAccess::Public },
    RouteEntry { path: paths::SIGN_IN, access: RouteAccess::AnonymousOnly },
    RouteEntry { path: paths::SIGN_UP, access: RouteAccess::AnonymousOnly },
    RouteEntry { path: paths::DASHBOARD, access: RouteAccess::Public },
    RouteEntry { path: paths::MARKET_REPORT, access: RouteAccess::Public },
    RouteEntry { path: paths::PROFILE, access: RouteAccess::AuthRequired },
    RouteEntry { path: paths::PROFILE_EDIT, access: RouteAccess::AuthRequired },
    RouteEntry { path: paths::JOBS, access: RouteAccess::AuthRequired },
    RouteEntry { path: paths::LOGOUT, access: RouteAccess::AuthRequired },
];

/// Classification for `path`. Unknown paths are public (they render the
/// not-found page).
pub fn classify(path: &str) -> RouteAccess {
    let normalized = match path.trim_end_matches('/') {
        "" => paths::HOME,
        trimmed => trimmed,
    };
    ROUTES.iter().find(|entry| entry.path == normalized).map_or(RouteAccess::Public, |entry| entry.access)
}

/// Build the gate for a classification, or `None` for public routes.
pub fn gate_for(access: RouteAccess, config: &AppConfig) -> Option<Gate> {
    let gate = match access.policy()? {
        GatePolicy::RequireSession => Gate::require_session(paths::SIGN_IN),
        GatePolicy::RequireAnonymous => Gate::require_anonymous(paths::HOME),
    };
    Some(gate.with_delay(config.redirect_delay))
}

/// Render `page` for `path`, wrapped in the gate its classification calls for.
pub fn guarded<F, V>(path: &'static str, page: F) -> impl IntoView
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    match gate_for(classify(path), &config) {
        Some(gate) => Either::Left(view! { <RouteGate gate=gate>{page()}</RouteGate> }),
        None => Either::Right(page()),
    }
}
