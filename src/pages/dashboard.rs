//! Dashboard page: protected landing route after sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues the resume listing through the shared gateway once mounted. Only
//! rendered for an authenticated session, so the request always carries the
//! token; an expired token is handled by the gateway while this page shows
//! its own message.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::route_guard::RequireAuth;
use crate::net::types::Resume;

/// One-line summary of the uploaded resumes.
fn resume_summary(resumes: &[Resume]) -> String {
    match resumes.len() {
        0 => "No resumes uploaded yet.".to_owned(),
        1 => "1 resume uploaded.".to_owned(),
        n => format!("{n} resumes uploaded."),
    }
}

/// Most recent upload first; timestamps are ISO-8601 so they sort lexically.
fn recent_resumes(mut resumes: Vec<Resume>, limit: usize) -> Vec<Resume> {
    resumes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    resumes.truncate(limit);
    resumes
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardLayout>
                <DashboardOverview/>
            </DashboardLayout>
        </RequireAuth>
    }
}

#[component]
fn DashboardOverview() -> impl IntoView {
    let resumes = RwSignal::new(None::<Result<Vec<Resume>, String>>);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::list_resumes(api.as_ref())
                .await
                .map_err(|e| crate::net::api::resumes_error_message(&e));
            resumes.set(Some(outcome));
        });
    }

    view! {
        <section class="dashboard-overview">
            <h1>"Dashboard"</h1>
            {move || match resumes.get() {
                None => view! { <p>"Loading resumes..."</p> }.into_any(),
                Some(Err(message)) => view! { <p class="dashboard-overview__error">{message}</p> }.into_any(),
                Some(Ok(items)) => {
                    let summary = resume_summary(&items);
                    let recent = recent_resumes(items, 5);
                    view! {
                        <p>{summary}</p>
                        <ul class="dashboard-overview__recent">
                            {recent
                                .into_iter()
                                .map(|r| view! { <li>{r.filename}" "<span class="muted">{r.created_at}</span></li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
