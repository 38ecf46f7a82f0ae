//! Route guard gating protected views behind a session check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route mounts [`RequireAuth`] fresh: the guard holds no
//! cross-mount cache, so navigating away and back always re-verifies. The
//! decision logic lives in pure functions (`plan_check`, `settle`) so the
//! state machine is testable without a browser.
//!
//! ORDERING
//! ========
//! The store read happens before the verifier call, and the render decision
//! happens only after the verifier settles, never optimistically before.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiError, AuthError};
use crate::net::types::UserIdentity;
use crate::session::SessionHandle;
use crate::state::auth::AuthState;

/// Auth status for one guard mount. `Checking` is the only non-terminal
/// state; it must never be read as a verdict before the check settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

/// What a fresh mount should do, decided from the store alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckPlan {
    /// No credential present: unauthenticated immediately, zero network
    /// calls.
    Redirect,
    /// Credential present: verify it against the backend.
    Verify(String),
}

/// Read the store and plan the mount's check.
pub fn plan_check(session: &SessionHandle) -> CheckPlan {
    match session.token() {
        Some(token) => CheckPlan::Verify(token),
        None => CheckPlan::Redirect,
    }
}

/// Convert a settled verifier verdict into the terminal status for this
/// mount. Any failure purges the stored token so the next mount takes the
/// no-token path.
pub fn settle(
    session: &SessionHandle,
    verdict: Result<UserIdentity, AuthError>,
) -> (AuthStatus, Option<UserIdentity>) {
    match verdict {
        Ok(identity) => (AuthStatus::Authenticated, Some(identity)),
        Err(_) => {
            session.clear();
            (AuthStatus::Unauthenticated, None)
        }
    }
}

/// Drop the session credential when a resource call reports 401, so every
/// guard's next check takes the no-token path.
pub fn purge_if_unauthorized(session: &SessionHandle, err: &ApiError) {
    if matches!(err, ApiError::Unauthorized) {
        session.clear();
    }
}

/// Banner text for a failed resource call, demoting the session first when
/// the failure was a 401. Every page error arm goes through here.
pub fn describe_failure(session: &SessionHandle, err: &ApiError) -> String {
    purge_if_unauthorized(session, err);
    err.to_string()
}

/// Wrapper that renders its children only for a verified session.
///
/// Mounts in `Checking` with a neutral placeholder, then either renders the
/// wrapped view or navigates to `/login` with history replacement so
/// back-navigation does not loop onto the protected page. Verification
/// failures never propagate past this boundary.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = RwSignal::new(AuthStatus::Checking);
    let navigate = use_navigate();

    match plan_check(&session) {
        CheckPlan::Redirect => {
            auth.update(|state| {
                state.user = None;
                state.loading = false;
            });
            status.set(AuthStatus::Unauthenticated);
        }
        CheckPlan::Verify(token) => {
            auth.update(|state| state.loading = true);
            #[cfg(feature = "hydrate")]
            {
                use std::sync::Arc;
                use std::sync::atomic::{AtomicBool, Ordering};

                // A settled check must not write state for an unmounted guard.
                let alive = Arc::new(AtomicBool::new(true));
                let alive_task = alive.clone();
                let session_task = session.clone();
                leptos::task::spawn_local(async move {
                    let verdict =
                        crate::net::api::verify_session_with_timeout(&token).await;
                    if !alive_task.load(Ordering::Relaxed) {
                        return;
                    }
                    match &verdict {
                        Err(AuthError::Unreachable(reason)) => {
                            log::warn!("session verification unreachable: {reason}");
                        }
                        Err(AuthError::Rejected(code)) => {
                            log::debug!("session rejected with status {code}");
                        }
                        Ok(_) => {}
                    }
                    let (next, identity) = settle(&session_task, verdict);
                    auth.update(|state| {
                        state.user = identity;
                        state.loading = false;
                    });
                    status.set(next);
                });
                on_cleanup(move || alive.store(false, Ordering::Relaxed));
            }
            #[cfg(not(feature = "hydrate"))]
            {
                // SSR renders the placeholder; the client re-checks on hydration.
                let _ = token;
            }
        }
    }

    Effect::new(move || {
        if status.get() == AuthStatus::Unauthenticated {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || match status.get() {
            AuthStatus::Checking => view! {
                <div class="guard-loading">
                    <div class="guard-loading__spinner"></div>
                    <p>"Loading..."</p>
                </div>
            }
                .into_any(),
            AuthStatus::Authenticated => children().into_any(),
            AuthStatus::Unauthenticated => ().into_any(),
        }}
    }
}
