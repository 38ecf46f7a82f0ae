//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome while reading shared state from Leptos
//! context providers. The shell renders links conditionally on auth state
//! but never gates access itself; that is the route guard's job.

pub mod app_header;
pub mod nav_menu;
