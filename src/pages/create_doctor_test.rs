use super::*;

#[test]
fn builds_trimmed_payload() {
    let doctor = build_new_doctor(" Dr. Chen ", "Cardiology", "555-0100", "chen@hospital.org")
        .unwrap();
    assert_eq!(doctor.name, "Dr. Chen");
    assert_eq!(doctor.specialization, "Cardiology");
}

#[test]
fn any_missing_field_is_rejected() {
    assert_eq!(
        build_new_doctor("Dr. Chen", "", "555", "c@h.org"),
        Err("Fill in all fields.")
    );
    assert_eq!(
        build_new_doctor("Dr. Chen", "Cardiology", "555", "  "),
        Err("Fill in all fields.")
    );
}
