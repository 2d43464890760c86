//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::gateway::Gateway;
use crate::net::transport::BrowserTransport;
use crate::pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage, register::RegisterPage};
use crate::state::session::{Session, SessionState};
use crate::util::reset::BrowserReload;
use crate::util::token_store::BrowserTokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single `Session` and the authorized gateway for the lifetime of
/// the page, and provides them plus the mirrored session signal as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = Session::new(BrowserTokenStore::new(), BrowserReload);

    // Mirror every published session state into a signal for route guards.
    let session_state = RwSignal::new(session.snapshot());
    session.subscribe(move |state| session_state.set(state.clone()));

    let api: ApiClient = Arc::new(Gateway::authorized(BrowserTransport::new(config), session.clone()));

    provide_context(session.clone());
    provide_context::<RwSignal<SessionState>>(session_state);
    provide_context(api);

    // Effects only run in the browser after hydration, so the server render
    // and the first client frame both show the bootstrap placeholder.
    Effect::new(move || {
        session.bootstrap();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/resume-client.css"/>
        <Title text="AI Resume Analyzer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
