//! Top header bar with identity display and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::SessionHandle;
use crate::state::auth::AuthState;

/// Console header. Shows the verified username and a sign-out action when a
/// session is established, or a sign-in link otherwise.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        auth.update(|state| state.user = None);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">"Hospital Management System"</h1>
            <div class="app-header__session">
                {move || match auth.get().user {
                    Some(user) => view! {
                        <span class="app-header__user">{user.username}</span>
                        <button class="app-header__logout" on:click=on_logout.clone()>
                            "Sign out"
                        </button>
                    }
                        .into_any(),
                    None => view! {
                        <a class="app-header__login" href="/login">
                            "Sign in"
                        </a>
                    }
                        .into_any(),
                }}
            </div>
        </header>
    }
}
