use super::*;

#[test]
fn nav_starts_expanded() {
    assert!(!UiState::default().nav_collapsed);
}

#[test]
fn toggled_flips_and_flips_back() {
    let state = UiState::default().toggled();
    assert!(state.nav_collapsed);
    assert!(!state.toggled().nav_collapsed);
}
