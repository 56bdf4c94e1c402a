//! Route guard policy and its redirect hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies identical guard behavior: `decide` maps the session
//! state and the route's access level to render / redirect / defer, and
//! `install_route_guard` performs the redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{LANDING_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
    /// Protected, and additionally requires the association-admin role.
    AdminOnly,
}

/// Access level of the catch-all redirect for unmatched paths.
pub const UNMATCHED_ROUTE_ACCESS: RouteAccess = RouteAccess::Public;

/// Outcome of guarding one route for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
    /// Bootstrap still running; render nothing route-specific yet.
    Defer,
}

/// Decide whether a route renders for `state`.
pub fn decide(state: &AuthState, access: RouteAccess) -> GuardDecision {
    match (state, access) {
        (AuthState::Loading, _) => GuardDecision::Defer,
        (_, RouteAccess::Public) => GuardDecision::Render,
        (AuthState::Anonymous, RouteAccess::Protected | RouteAccess::AdminOnly) => {
            GuardDecision::Redirect(LOGIN_PATH)
        }
        (AuthState::Authenticated(_), RouteAccess::Protected) => GuardDecision::Render,
        (AuthState::Authenticated(user), RouteAccess::AdminOnly) => {
            if user.is_admin() {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(LANDING_PATH)
            }
        }
    }
}

/// Navigate whenever the current decision is a redirect.
pub fn install_route_guard<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
