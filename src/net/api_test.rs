use super::*;

#[test]
fn bearer_header_wraps_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn backend_error_message_names_status() {
    assert_eq!(backend_error_message(500), "request failed with status 500");
}

#[test]
fn assistant_endpoint_scopes_to_patient_when_selected() {
    assert!(assistant_endpoint(None).ends_with("/ai/query"));
    assert!(assistant_endpoint(Some("p1")).ends_with("/ai/patient/p1/query"));
}

#[test]
fn auth_error_kinds_stay_distinct() {
    assert_ne!(
        AuthError::Rejected(401),
        AuthError::Unreachable("timeout".to_owned())
    );
    assert_eq!(
        AuthError::Rejected(401).to_string(),
        "session rejected by backend (status 401)"
    );
}

#[test]
fn api_error_displays_backend_detail_verbatim() {
    let err = ApiError::Backend("Username already exists".to_owned());
    assert_eq!(err.to_string(), "Username already exists");
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
}

// =============================================================
// verification timeout race
// =============================================================

fn identity() -> crate::net::types::UserIdentity {
    crate::net::types::UserIdentity {
        username: "u1".to_owned(),
        email: "u1@hospital.org".to_owned(),
    }
}

#[test]
fn deadline_expiry_maps_to_unreachable() {
    let verdict = futures::executor::block_on(race_verification(
        std::future::pending::<Result<crate::net::types::UserIdentity, AuthError>>(),
        std::future::ready(()),
    ));
    assert_eq!(
        verdict,
        Err(AuthError::Unreachable("verification timed out".to_owned()))
    );
}

#[test]
fn settled_request_wins_over_a_live_deadline() {
    let verdict = futures::executor::block_on(race_verification(
        std::future::ready(Ok(identity())),
        std::future::pending::<()>(),
    ));
    assert_eq!(verdict, Ok(identity()));
}

#[test]
fn settled_rejection_wins_over_a_live_deadline() {
    let verdict = futures::executor::block_on(race_verification(
        std::future::ready(Err(AuthError::Rejected(401))),
        std::future::pending::<()>(),
    ));
    assert_eq!(verdict, Err(AuthError::Rejected(401)));
}
