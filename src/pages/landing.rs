//! Public landing page. Signed-in visitors are sent to the dashboard.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::SessionPlaceholder;
use crate::config::{ENTRY_PATH, REGISTER_PATH};
use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, install_auth_redirect, public_decision};

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_auth_redirect(session, use_navigate());

    move || match public_decision(&session.get()) {
        GuardDecision::Placeholder => view! { <SessionPlaceholder/> }.into_any(),
        GuardDecision::Redirect => view! { <p class="session-redirect">"Opening your dashboard..."</p> }.into_any(),
        GuardDecision::Render => view! {
            <div class="landing-page">
                <h1>"AI Resume Analyzer"</h1>
                <p class="landing-page__tagline">
                    "Match your resume against job descriptions and see where it falls short."
                </p>
                <div class="landing-page__actions">
                    <A href=ENTRY_PATH>"Login"</A>
                    <A href=REGISTER_PATH>"Create account"</A>
                </div>
            </div>
        }
        .into_any(),
    }
}
