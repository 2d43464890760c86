//! Shared route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected and public-only routes must agree on how the three session
//! states render. The decisions are plain functions of `SessionState`; the
//! components re-run them whenever the session signal changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{ENTRY_PATH, HOME_PATH};
use crate::state::session::SessionState;

/// What a route should show for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not restored yet: show a neutral placeholder.
    Placeholder,
    /// Navigate away (to the entry path for protected routes, home for
    /// public-only routes).
    Redirect,
    /// Render the route's content.
    Render,
}

/// Decision for a protected route.
pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if !state.is_bootstrapped() {
        GuardDecision::Placeholder
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect
    }
}

/// Decision for a public-only route (landing): signed-in users go home.
pub fn public_decision(state: &SessionState) -> GuardDecision {
    if !state.is_bootstrapped() {
        GuardDecision::Placeholder
    } else if state.is_authenticated() {
        GuardDecision::Redirect
    } else {
        GuardDecision::Render
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to the entry path whenever the session settles as signed out,
/// including after the route is already mounted.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_decision(&session.get()) == GuardDecision::Redirect {
            navigate(ENTRY_PATH, replace());
        }
    });
}

/// Redirect to the protected home whenever the session is signed in.
pub fn install_auth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if public_decision(&session.get()) == GuardDecision::Redirect {
            navigate(HOME_PATH, replace());
        }
    });
}
