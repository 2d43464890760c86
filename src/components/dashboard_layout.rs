//! Chrome for protected screens: sidebar navigation, identity, sign-out.

#[cfg(test)]
#[path = "dashboard_layout_test.rs"]
mod dashboard_layout_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::HOME_PATH;
use crate::state::session::{Session, SessionState};

/// Header label for the signed-in user.
///
/// A restored token has no confirmed identity until the service says so.
pub fn identity_label(state: &SessionState) -> String {
    match state.current_user() {
        Some(user) => user.name.clone(),
        None if state.is_authenticated() => "Signed in".to_owned(),
        None => String::new(),
    }
}

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let state = expect_context::<RwSignal<SessionState>>();

    // The route guard observes the transition and redirects.
    let on_logout = move |_| session.logout();

    view! {
        <div class="dashboard-layout">
            <aside class="dashboard-layout__sidebar">
                <h2>"AI Resume Analyzer"</h2>
                <nav class="dashboard-layout__nav">
                    <A href=HOME_PATH>"Dashboard"</A>
                </nav>
            </aside>
            <div class="dashboard-layout__main">
                <header class="dashboard-layout__header">
                    <span class="dashboard-layout__identity">{move || identity_label(&state.get())}</span>
                    <button class="btn dashboard-layout__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="dashboard-layout__content">{children()}</main>
            </div>
        </div>
    }
}
