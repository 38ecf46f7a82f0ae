//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! The backend serializes Mongo documents, so record ids arrive under the
//! `_id` key; every record type aliases that onto `id`. Optional fields stay
//! `Option` rather than defaulting so "absent" survives a round-trip.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identity payload returned by `GET /auth/me`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub username: String,
    pub email: String,
}

/// Bearer token issued by `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Error body the backend attaches to 4xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// A patient record.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Patient {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub address: String,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub admission_date: Option<String>,
}

/// Payload for `POST /patients/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
}

/// A doctor record.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub email: String,
}

/// Payload for `POST /doctors/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub email: String,
}

/// Appointment lifecycle status.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Wire value, also used for `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a wire/form value, falling back to `Scheduled` on anything odd.
    pub fn parse(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Scheduled,
        }
    }
}

/// An appointment record.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for `POST /appointments/` and `PUT /appointments/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppointmentUpsert {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregate counts and recent activity from `GET /dashboard/stats`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_patients: u64,
    pub total_doctors: u64,
    pub total_appointments: u64,
    #[serde(default)]
    pub appointments_by_status: HashMap<String, u64>,
    #[serde(default)]
    pub recent_patients: Vec<Patient>,
    #[serde(default)]
    pub todays_appointments: Vec<Appointment>,
}

/// Reply from the AI relay (`POST /ai/query`).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AssistantReply {
    pub response: String,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}
