use super::*;

// =============================================================
// Record id aliasing
// =============================================================

#[test]
fn patient_decodes_mongo_style_id() {
    let patient: Patient = serde_json::from_str(
        r#"{
            "_id": "64f0c1",
            "name": "Jane Smith",
            "age": 44,
            "gender": "female",
            "contact": "555-0101",
            "address": "12 Elm St",
            "blood_type": "O+",
            "medical_history": null,
            "admission_date": "2025-03-01T09:30:00"
        }"#,
    )
    .unwrap();
    assert_eq!(patient.id.as_deref(), Some("64f0c1"));
    assert_eq!(patient.blood_type.as_deref(), Some("O+"));
    assert!(patient.medical_history.is_none());
}

#[test]
fn patient_decodes_without_id_or_optionals() {
    let patient: Patient = serde_json::from_str(
        r#"{"name":"John Doe","age":30,"gender":"male","contact":"555","address":"1 Main"}"#,
    )
    .unwrap();
    assert!(patient.id.is_none());
    assert!(patient.admission_date.is_none());
}

#[test]
fn doctor_decodes_plain_id_field_too() {
    let doctor: Doctor = serde_json::from_str(
        r#"{"id":"d1","name":"Dr. Chen","specialization":"Cardiology","contact":"555","email":"c@h.org"}"#,
    )
    .unwrap();
    assert_eq!(doctor.id.as_deref(), Some("d1"));
}

// =============================================================
// Appointment status wire values
// =============================================================

#[test]
fn appointment_status_round_trips_lowercase() {
    assert_eq!(
        serde_json::to_string(&AppointmentStatus::Cancelled).unwrap(),
        "\"cancelled\""
    );
    let status: AppointmentStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(status, AppointmentStatus::Completed);
}

#[test]
fn appointment_status_parse_defaults_to_scheduled() {
    assert_eq!(AppointmentStatus::parse("completed"), AppointmentStatus::Completed);
    assert_eq!(AppointmentStatus::parse("nonsense"), AppointmentStatus::Scheduled);
}

#[test]
fn appointment_upsert_omits_absent_notes() {
    let payload = AppointmentUpsert {
        patient_id: "p1".to_owned(),
        doctor_id: "d1".to_owned(),
        date: "2025-06-01T10:00".to_owned(),
        status: AppointmentStatus::Scheduled,
        notes: None,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(!json.contains("notes"));
    assert!(json.contains("\"scheduled\""));
}

// =============================================================
// Auth and aggregate payloads
// =============================================================

#[test]
fn identity_decodes_auth_me_payload() {
    let identity: UserIdentity =
        serde_json::from_str(r#"{"username":"admin","email":"admin@hospital.org"}"#).unwrap();
    assert_eq!(identity.username, "admin");
}

#[test]
fn error_body_carries_detail_verbatim() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Username already exists"}"#).unwrap();
    assert_eq!(body.detail, "Username already exists");
}

#[test]
fn dashboard_stats_tolerates_missing_sections() {
    let stats: DashboardStats = serde_json::from_str(
        r#"{"total_patients":3,"total_doctors":2,"total_appointments":5}"#,
    )
    .unwrap();
    assert_eq!(stats.total_patients, 3);
    assert!(stats.appointments_by_status.is_empty());
    assert!(stats.recent_patients.is_empty());
}

#[test]
fn assistant_reply_decodes_sources_list() {
    let reply: AssistantReply =
        serde_json::from_str(r#"{"response":"Drink water.","sources":["Gemma 3 1B via Ollama"]}"#)
            .unwrap();
    assert_eq!(reply.sources.unwrap().len(), 1);
}
