use super::*;

#[test]
fn valid_input_passes_through_trimmed() {
    let input =
        validate_signup_input(" admin ", " admin@hospital.org ", "hunter2", "hunter2").unwrap();
    assert_eq!(input.username, "admin");
    assert_eq!(input.email, "admin@hospital.org");
    assert_eq!(input.password, "hunter2");
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_signup_input("admin", "a@h.org", "hunter2", "hunter3"),
        Err("Passwords don't match")
    );
}

#[test]
fn missing_fields_are_rejected() {
    assert_eq!(
        validate_signup_input("", "a@h.org", "hunter2", "hunter2"),
        Err("Fill in username, email, and password.")
    );
    assert_eq!(
        validate_signup_input("admin", "a@h.org", "", ""),
        Err("Fill in username, email, and password.")
    );
}
