use super::*;

#[test]
fn builds_payload_with_parsed_status() {
    let appointment =
        build_appointment(" p1 ", "d1", "2025-06-01T10:00", "completed", "").unwrap();
    assert_eq!(appointment.patient_id, "p1");
    assert_eq!(appointment.status, AppointmentStatus::Completed);
    assert!(appointment.notes.is_none());
}

#[test]
fn notes_survive_when_present() {
    let appointment =
        build_appointment("p1", "d1", "2025-06-01T10:00", "scheduled", " bring referral ")
            .unwrap();
    assert_eq!(appointment.notes.as_deref(), Some("bring referral"));
}

#[test]
fn missing_ids_or_date_are_rejected() {
    assert_eq!(
        build_appointment("", "d1", "2025-06-01T10:00", "scheduled", ""),
        Err("Fill in patient ID, doctor ID, and date.")
    );
    assert_eq!(
        build_appointment("p1", "d1", "  ", "scheduled", ""),
        Err("Fill in patient ID, doctor ID, and date.")
    );
}

#[test]
fn unknown_status_value_defaults_to_scheduled() {
    let appointment = build_appointment("p1", "d1", "2025-06-01T10:00", "??", "").unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
}
