//! Gate decision contract.
//!
//! A gate is a policy plus the redirect parameters the router supplies when
//! composing a route. Evaluation is pure: the same token always yields the
//! same decision and the session is never touched.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::time::Duration;

use crate::util::config::DEFAULT_REDIRECT_DELAY_MS;

pub const DEFAULT_SIGNED_OUT_MESSAGE: &str = "You must log in first to use this page.";
pub const DEFAULT_SIGNED_IN_MESSAGE: &str = "You are already logged in.";

/// Access policy attached to a route when the route table is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RouteAccess {
    #[default]
    Public,
    AuthRequired,
    AnonymousOnly,
}

impl RouteAccess {
    /// The gate policy for this classification; `None` for public routes.
    pub fn policy(self) -> Option<GatePolicy> {
        match self {
            Self::Public => None,
            Self::AuthRequired => Some(GatePolicy::RequireSession),
            Self::AnonymousOnly => Some(GatePolicy::RequireAnonymous),
        }
    }
}

/// Which session state a gate lets through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GatePolicy {
    RequireSession,
    RequireAnonymous,
}

impl GatePolicy {
    fn default_message(self) -> &'static str {
        match self {
            Self::RequireSession => DEFAULT_SIGNED_OUT_MESSAGE,
            Self::RequireAnonymous => DEFAULT_SIGNED_IN_MESSAGE,
        }
    }

    fn allows(self, authenticated: bool) -> bool {
        match self {
            Self::RequireSession => authenticated,
            Self::RequireAnonymous => !authenticated,
        }
    }
}

/// Where to go, how long to wait, and what to show meanwhile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
    pub delay: Duration,
    pub message: String,
}

/// Outcome of one gate evaluation. The page content itself is rendered by
/// the caller on `Allow`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    DenyWithRedirect(Redirect),
}

impl GateDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Allow => None,
            Self::DenyWithRedirect(redirect) => Some(redirect),
        }
    }
}

/// A configured gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gate {
    policy: GatePolicy,
    redirect_path: String,
    delay: Duration,
    denied_message: String,
}

impl Gate {
    pub fn new(policy: GatePolicy, redirect_path: impl Into<String>) -> Self {
        Self {
            policy,
            redirect_path: redirect_path.into(),
            delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            denied_message: policy.default_message().to_owned(),
        }
    }

    /// Gate that lets signed-in users through and sends everyone else to `redirect_path`.
    pub fn require_session(redirect_path: impl Into<String>) -> Self {
        Self::new(GatePolicy::RequireSession, redirect_path)
    }

    /// Gate that lets anonymous users through and sends signed-in users to `redirect_path`.
    pub fn require_anonymous(redirect_path: impl Into<String>) -> Self {
        Self::new(GatePolicy::RequireAnonymous, redirect_path)
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.denied_message = message.into();
        self
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    pub fn redirect_path(&self) -> &str {
        &self.redirect_path
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Decide for a token snapshot. Empty tokens count as absent.
    pub fn evaluate(&self, token: Option<&str>) -> GateDecision {
        let authenticated = token.is_some_and(|t| !t.is_empty());
        if self.policy.allows(authenticated) {
            GateDecision::Allow
        } else {
            GateDecision::DenyWithRedirect(Redirect {
                target: self.redirect_path.clone(),
                delay: self.delay,
                message: self.denied_message.clone(),
            })
        }
    }
}
