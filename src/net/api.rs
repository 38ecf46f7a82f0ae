//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into render state without crashing hydration. Session verification has
//! its own two-kind taxonomy (`AuthError`) because the route guard treats
//! "backend said no" and "could not reach the backend" as distinct facts
//! even though both currently demote the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    Appointment, AppointmentUpsert, AssistantReply, DashboardStats, Doctor, NewDoctor, NewPatient,
    Patient, TokenResponse, UserIdentity,
};

/// Verification failure for a stored session token. Single attempt, no
/// retry; the caller decides whether to purge the store.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend answered with a non-2xx status: the token is invalid or
    /// expired.
    #[error("session rejected by backend (status {0})")]
    Rejected(u16),
    /// The verification endpoint could not be reached or did not answer in
    /// time.
    #[error("verification endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Failure of a resource (non-auth) call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the request; carries the `detail` message when
    /// one was provided.
    #[error("{0}")]
    Backend(String),
    /// The backend no longer accepts the session.
    #[error("session expired")]
    Unauthorized,
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn backend_error_message(status: u16) -> String {
    format!("request failed with status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn assistant_endpoint(patient_id: Option<&str>) -> String {
    match patient_id {
        Some(id) => crate::config::api_url(&format!("/ai/patient/{id}/query")),
        None => crate::config::api_url("/ai/query"),
    }
}

/// Seconds before an unanswered verification call is treated as
/// [`AuthError::Unreachable`].
pub const VERIFY_TIMEOUT_SECS: u64 = 10;

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    if resp.status() == 401 {
        return ApiError::Unauthorized;
    }
    match resp.json::<super::types::ErrorBody>().await {
        Ok(body) => ApiError::Backend(body.detail),
        Err(_) => ApiError::Backend(backend_error_message(resp.status())),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = crate::config::api_url(path);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_json<B, T>(
    method: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let url = crate::config::api_url(path);
    let builder = match method {
        "PUT" => gloo_net::http::Request::put(&url),
        _ => gloo_net::http::Request::post(&url),
    };
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Verify a stored token against `GET /auth/me`.
///
/// Sends the token as a bearer credential; a 2xx answer yields the identity
/// payload. No side effects; the route guard owns the decision to purge
/// the store on failure.
///
/// # Errors
///
/// `Rejected` on any non-2xx status, `Unreachable` on transport failure.
pub async fn verify_session(token: &str) -> Result<UserIdentity, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url("/auth/me");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::Rejected(resp.status()));
        }
        resp.json::<UserIdentity>()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(AuthError::Unreachable("not available on server".to_owned()))
    }
}

/// Race a verification request against a deadline. Whichever settles first
/// wins; the deadline firing maps to [`AuthError::Unreachable`] so a hung
/// request follows the normal demotion path.
#[cfg(any(test, feature = "hydrate"))]
async fn race_verification<R, D>(request: R, deadline: D) -> Result<UserIdentity, AuthError>
where
    R: std::future::Future<Output = Result<UserIdentity, AuthError>>,
    D: std::future::Future<Output = ()>,
{
    use futures::FutureExt;

    let request = request.fuse();
    let deadline = deadline.fuse();
    futures::pin_mut!(request, deadline);
    futures::select! {
        verdict = request => verdict,
        () = deadline => Err(AuthError::Unreachable("verification timed out".to_owned())),
    }
}

/// [`verify_session`] raced against a [`VERIFY_TIMEOUT_SECS`] timer so a
/// hanging network request cannot leave a guard checking forever.
#[cfg(feature = "hydrate")]
pub async fn verify_session_with_timeout(token: &str) -> Result<UserIdentity, AuthError> {
    race_verification(
        verify_session(token),
        gloo_timers::future::sleep(std::time::Duration::from_secs(VERIFY_TIMEOUT_SECS)),
    )
    .await
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// `Backend` with the server's `detail` message on rejected credentials.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        send_json("POST", "/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Register a new console account via `POST /auth/register`.
///
/// # Errors
///
/// `Backend` with the server's `detail` message on validation failure.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "confirm_password": confirm_password,
        });
        let _: serde_json::Value = send_json("POST", "/auth/register", &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password, confirm_password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all patients from `GET /patients/`.
pub async fn fetch_patients() -> Result<Vec<Patient>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/patients/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one patient from `GET /patients/{id}`.
pub async fn fetch_patient(id: &str) -> Result<Patient, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/patients/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all doctors from `GET /doctors/`.
pub async fn fetch_doctors() -> Result<Vec<Doctor>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/doctors/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch all appointments from `GET /appointments/`.
pub async fn fetch_appointments() -> Result<Vec<Appointment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/appointments/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one appointment from `GET /appointments/{id}`.
pub async fn fetch_appointment(id: &str) -> Result<Appointment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/appointments/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch aggregate counts from `GET /dashboard/stats`.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/dashboard/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a patient via `POST /patients/`.
pub async fn create_patient(patient: &NewPatient) -> Result<Patient, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", "/patients/", patient).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = patient;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a doctor via `POST /doctors/`.
pub async fn create_doctor(doctor: &NewDoctor) -> Result<Doctor, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", "/doctors/", doctor).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = doctor;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an appointment via `POST /appointments/`.
pub async fn create_appointment(appointment: &AppointmentUpsert) -> Result<Appointment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", "/appointments/", appointment).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = appointment;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update an appointment via `PUT /appointments/{id}`.
pub async fn update_appointment(
    id: &str,
    appointment: &AppointmentUpsert,
) -> Result<Appointment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json("PUT", &format!("/appointments/{id}"), appointment).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, appointment);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Search patients by name, contact, or address via `GET /search/patients`.
/// The term goes through the builder's query support so characters like `&`
/// survive encoding.
pub async fn search_patients(query: &str) -> Result<Vec<Patient>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url("/search/patients");
        let resp = gloo_net::http::Request::get(&url)
            .query([("query", query)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<Vec<Patient>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Send a question to the AI relay, optionally scoped to one patient.
pub async fn assistant_query(
    query: &str,
    patient_id: Option<&str>,
) -> Result<AssistantReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = assistant_endpoint(patient_id);
        let payload = serde_json::json!({ "query": query });
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json::<AssistantReply>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, patient_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
