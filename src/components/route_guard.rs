//! Route guard for protected screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. Reads the mirrored session signal, so a
//! sign-out triggered anywhere (layout button, forced logout) re-renders
//! already-mounted views into a redirect.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

/// Neutral view shown until the persisted session has been read.
#[component]
pub fn SessionPlaceholder() -> impl IntoView {
    view! {
        <div class="session-placeholder" aria-busy="true">
            <p>"Loading..."</p>
        </div>
    }
}

/// Render `children` only for a bootstrapped, authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    move || match guard_decision(&session.get()) {
        GuardDecision::Placeholder => view! { <SessionPlaceholder/> }.into_any(),
        GuardDecision::Redirect => view! { <p class="session-redirect">"Redirecting to sign in..."</p> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
