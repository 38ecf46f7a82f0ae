//! Backend location configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST helper in `net::api` prefixes its path with `api_base()`. The
//! value is fixed at compile time so the shipped WASM bundle carries no
//! runtime configuration surface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend origin when `MEDISYNC_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Backend origin for REST calls, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("MEDISYNC_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join the backend origin with an absolute path like `/patients/`.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}
