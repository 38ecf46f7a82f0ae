use super::{scope_for_selection, welcome_message};

#[test]
fn welcome_comes_from_the_assistant() {
    let greeting = welcome_message();
    assert!(!greeting.from_user);
    assert!(greeting.sources.is_empty());
    assert!(greeting.text.contains("health assistant"));
}

#[test]
fn empty_selection_is_unscoped() {
    assert_eq!(scope_for_selection(""), None);
    assert_eq!(scope_for_selection("   "), None);
}

#[test]
fn selection_scopes_to_patient_id() {
    assert_eq!(scope_for_selection("65fa12"), Some("65fa12"));
}
