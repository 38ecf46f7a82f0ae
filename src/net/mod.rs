//! REST client for the hospital-records backend.
//!
//! DESIGN
//! ======
//! `types` mirrors the backend JSON wire format so serde round-trips stay
//! lossless; `api` wraps gloo-net calls and converts failures into the
//! crate error taxonomy instead of panicking.

pub mod api;
pub mod types;
