//! Registration page for new console accounts.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

/// Validated registration payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Client-side validation before the register call: all fields present and
/// the confirmation matching.
pub fn validate_signup_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<SignupInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    if password != confirm_password {
        return Err("Passwords don't match");
    }
    Ok(SignupInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    })
}

/// Signup page. Registers an account and prompts the user to log in.
#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        success.set(None);
        let input = match validate_signup_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(
                &input.username,
                &input.email,
                &input.password,
                &input.confirm_password,
            )
            .await
            {
                Ok(()) => {
                    let _ = success
                        .try_set(Some("Registration successful! You can now login.".to_owned()));
                    let _ = username.try_set(String::new());
                    let _ = email.try_set(String::new());
                    let _ = password.try_set(String::new());
                    let _ = confirm_password.try_set(String::new());
                }
                Err(err) => {
                    let _ = error.try_set(Some(err.to_string()));
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign Up"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="banner banner--error">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success.get().is_some()>
                    <div class="banner banner--success">
                        {move || success.get().unwrap_or_default()}
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
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type=password_type
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Confirm Password"
                        <input
                            type=password_type
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || show_password.get()
                            on:change=move |_| show_password.update(|shown| *shown = !*shown)
                        />
                        "Show password"
                    </label>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Processing..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__alt">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
