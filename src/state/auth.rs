//! Auth-session state for the current console user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the route guard after verification settles; read by the
//! header and user-aware components for identity-dependent rendering. The
//! token itself never lives here; it stays in the session store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserIdentity;

/// Authentication state tracking the verified identity and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub loading: bool,
}
