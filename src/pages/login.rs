//! Login page exchanging credentials for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::session::SessionHandle;

/// Trim and require both fields before a login attempt.
pub fn validate_login_input(
    username: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login page. On success stores the token and navigates to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionHandle>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(fields) => fields,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(token) => {
                        session.store_token(&token.access_token);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        let _ = error.try_set(Some(err.to_string()));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign In"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="banner banner--error">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Username"
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__alt">
                    "No account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
