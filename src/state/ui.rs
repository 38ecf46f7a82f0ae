//! Local UI chrome state (side menu collapse).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so the nav
//! shell can evolve independently of record data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation shell.
#[derive(Clone, Copy, Debug)]
pub struct UiState {
    /// Side menu collapsed to icons-only.
    pub nav_collapsed: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { nav_collapsed: false }
    }
}

impl UiState {
    /// Toggle the side menu.
    pub fn toggled(self) -> Self {
        Self {
            nav_collapsed: !self.nav_collapsed,
        }
    }
}
