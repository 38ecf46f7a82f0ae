//! Durable token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is treated as an opaque string; no shape validation happens
//! here. Browser reads/writes are hydrate-only so SSR stays deterministic.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Mutex;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "medisync.token";

/// Synchronous accessor for the persisted session token.
pub trait TokenStore {
    /// Read the token, `None` when absent.
    fn get(&self) -> Option<String>;
    /// Persist a token, overwriting any prior value.
    fn set(&self, token: &str);
    /// Remove the token. Must be idempotent.
    fn clear(&self);
}

/// Token store backed by browser `localStorage` under [`TOKEN_KEY`].
///
/// Durable across reloads. Outside a browser (SSR, tests) every operation
/// is a no-op and reads return `None`.
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store for tests.
#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self
            .token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }
}
