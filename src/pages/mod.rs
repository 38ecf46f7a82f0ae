//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: fetch on mount, render
//! list/detail/form, submit, and show loading/error/success state. One
//! request is in flight per component instance at a time. Validation and
//! formatting decisions live in pure helpers so the screens stay testable.

pub mod appointment_detail;
pub mod appointments;
pub mod assistant;
pub mod create_appointment;
pub mod create_doctor;
pub mod create_patient;
pub mod dashboard;
pub mod doctors;
pub mod login;
pub mod patient_detail;
pub mod patients;
pub mod search;
pub mod signup;
pub mod update_appointment;
