//! Session credential storage and the route-guard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is the only mutable state shared across component
//! boundaries. It lives behind [`SessionHandle`], which is provided via
//! Leptos context at app construction so tests can substitute an in-memory
//! store for the browser-backed one.

pub mod guard;
pub mod store;

use std::sync::Arc;

use crate::session::store::{BrowserStore, TokenStore};

/// Cloneable, process-wide handle to the persisted session token.
///
/// All reads and writes of the credential go through this handle; any
/// component may call [`SessionHandle::clear`] (for example on a 401 from a
/// resource call) and every guard treats the cleared store as immediately
/// unauthenticated on its next check.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn TokenStore + Send + Sync>,
}

impl SessionHandle {
    /// Handle backed by browser localStorage (no-op outside the browser).
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }

    /// Handle backed by an arbitrary store, used by tests.
    pub fn new(store: impl TokenStore + Send + Sync + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Current token, if one is persisted.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Persist a new token, overwriting any prior value.
    pub fn store_token(&self, token: &str) {
        self.store.set(token);
    }

    /// Remove the token. Idempotent.
    pub fn clear(&self) {
        self.store.clear();
    }
}
