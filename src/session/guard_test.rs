use super::*;
use crate::session::store::MemoryStore;

fn identity() -> UserIdentity {
    UserIdentity {
        username: "u1".to_owned(),
        email: "u1@hospital.org".to_owned(),
    }
}

// =============================================================
// plan_check: store read decides without any network involvement
// =============================================================

#[test]
fn no_token_redirects_without_a_verify_plan() {
    let session = SessionHandle::new(MemoryStore::new());
    assert_eq!(plan_check(&session), CheckPlan::Redirect);
}

#[test]
fn stored_token_plans_a_verification() {
    let session = SessionHandle::new(MemoryStore::with_token("abc"));
    assert_eq!(plan_check(&session), CheckPlan::Verify("abc".to_owned()));
}

// =============================================================
// settle: verdict -> terminal status + store side effect
// =============================================================

#[test]
fn successful_verdict_authenticates_and_keeps_token() {
    let session = SessionHandle::new(MemoryStore::with_token("abc"));
    let (status, user) = settle(&session, Ok(identity()));
    assert_eq!(status, AuthStatus::Authenticated);
    assert_eq!(user.unwrap().username, "u1");
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn rejected_verdict_purges_token_and_demotes() {
    let session = SessionHandle::new(MemoryStore::with_token("expired"));
    let (status, user) = settle(&session, Err(AuthError::Rejected(401)));
    assert_eq!(status, AuthStatus::Unauthenticated);
    assert!(user.is_none());
    assert_eq!(session.token(), None);
}

#[test]
fn unreachable_verdict_is_demoted_like_rejection() {
    let session = SessionHandle::new(MemoryStore::with_token("abc"));
    let (status, _) = settle(
        &session,
        Err(AuthError::Unreachable("connection refused".to_owned())),
    );
    assert_eq!(status, AuthStatus::Unauthenticated);
    assert_eq!(session.token(), None);
}

#[test]
fn mount_after_demotion_takes_the_no_token_path() {
    let session = SessionHandle::new(MemoryStore::with_token("expired"));
    let _ = settle(&session, Err(AuthError::Rejected(401)));
    assert_eq!(plan_check(&session), CheckPlan::Redirect);
}

// =============================================================
// resource-call 401 demotion
// =============================================================

#[test]
fn unauthorized_resource_error_clears_the_store() {
    let session = SessionHandle::new(MemoryStore::with_token("abc"));
    purge_if_unauthorized(&session, &ApiError::Unauthorized);
    assert_eq!(session.token(), None);
}

#[test]
fn other_resource_errors_leave_the_store_alone() {
    let session = SessionHandle::new(MemoryStore::with_token("abc"));
    purge_if_unauthorized(&session, &ApiError::Backend("boom".to_owned()));
    purge_if_unauthorized(&session, &ApiError::Network("offline".to_owned()));
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn describing_an_unauthorized_failure_clears_the_store() {
    let session = SessionHandle::new(MemoryStore::with_token("abc"));
    let message = describe_failure(&session, &ApiError::Unauthorized);
    assert_eq!(message, "session expired");
    assert_eq!(session.token(), None);
    assert_eq!(plan_check(&session), CheckPlan::Redirect);
}

#[test]
fn describing_other_failures_keeps_the_token() {
    let session = SessionHandle::new(MemoryStore::with_token("abc"));
    let message = describe_failure(&session, &ApiError::Backend("boom".to_owned()));
    assert_eq!(message, "boom");
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn default_status_is_checking() {
    assert_eq!(AuthStatus::default(), AuthStatus::Checking);
}
