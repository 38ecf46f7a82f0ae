use super::*;

#[test]
fn api_url_joins_origin_and_path() {
    let url = api_url("/auth/me");
    assert!(url.ends_with("/auth/me"));
    assert!(url.starts_with("http"));
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn default_base_points_at_local_backend() {
    assert_eq!(DEFAULT_API_BASE, "http://localhost:8000");
}
