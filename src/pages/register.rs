//! Registration page. Creating an account does not sign in; the user is sent
//! to the login page afterwards.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::ENTRY_PATH;
use crate::net::types::RegisterRequest;

/// Delay before leaving for the login page after a successful registration.
#[cfg(any(test, feature = "hydrate"))]
const REDIRECT_DELAY_MS: u32 = 1_200;

#[cfg(any(test, feature = "hydrate"))]
const SUCCESS_MESSAGE: &str = "Registration successful. Please login.";

fn validate_register_input(name: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::api::ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(None);
        let request = match validate_register_input(&name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(api.as_ref(), &request).await {
                    Ok(_) => {
                        success.set(Some(SUCCESS_MESSAGE.to_owned()));
                        busy.set(false);
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate(ENTRY_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::info!("registration failed: {e}");
                        error.set(Some(crate::net::api::register_error_message(&e)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Create Account"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            class="login-input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || success.get().is_some()>
                        <p class="login-message">{move || success.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? " <A href=ENTRY_PATH>"Login"</A>
                </p>
            </div>
        </div>
    }
}
