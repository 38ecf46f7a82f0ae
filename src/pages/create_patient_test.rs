use super::*;

#[test]
fn builds_payload_with_optionals_present() {
    let patient = build_new_patient(
        " Jane Smith ",
        "44",
        "female",
        "555-0101",
        "12 Elm St",
        "O+",
        "asthma",
    )
    .unwrap();
    assert_eq!(patient.name, "Jane Smith");
    assert_eq!(patient.age, 44);
    assert_eq!(patient.blood_type.as_deref(), Some("O+"));
}

#[test]
fn blank_optionals_become_none() {
    let patient =
        build_new_patient("Jane", "44", "female", "555", "12 Elm St", "  ", "").unwrap();
    assert!(patient.blood_type.is_none());
    assert!(patient.medical_history.is_none());
}

#[test]
fn non_numeric_age_is_rejected() {
    assert_eq!(
        build_new_patient("Jane", "forty", "female", "555", "12 Elm St", "", ""),
        Err("Enter a valid age.")
    );
}

#[test]
fn missing_required_fields_are_rejected() {
    assert_eq!(
        build_new_patient("", "44", "female", "555", "12 Elm St", "", ""),
        Err("Fill in name, gender, contact, and address.")
    );
}
