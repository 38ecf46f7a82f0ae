use super::validate_query;

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(validate_query("  smith  "), Ok("smith".to_owned()));
}

#[test]
fn rejects_empty_query() {
    assert_eq!(validate_query(""), Err("Enter a search term."));
    assert_eq!(validate_query("   "), Err("Enter a search term."));
}
