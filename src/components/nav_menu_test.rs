use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active("/patients", "/patients"));
}

#[test]
fn descendant_path_is_active() {
    assert!(is_active("/patients", "/patients/64f0c1"));
    assert!(is_active("/appointments", "/appointments/a1/edit"));
}

#[test]
fn sibling_prefix_is_not_active() {
    assert!(!is_active("/patients", "/patients-archive"));
}

#[test]
fn dashboard_link_only_matches_root_exactly() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/patients"));
}
