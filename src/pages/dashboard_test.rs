use super::*;

#[test]
fn status_counts_render_in_stable_order() {
    let mut counts = HashMap::new();
    counts.insert("scheduled".to_owned(), 4);
    counts.insert("cancelled".to_owned(), 1);
    counts.insert("completed".to_owned(), 2);
    assert_eq!(
        sorted_status_counts(&counts),
        vec![
            ("cancelled".to_owned(), 1),
            ("completed".to_owned(), 2),
            ("scheduled".to_owned(), 4),
        ]
    );
}

#[test]
fn empty_counts_render_nothing() {
    assert!(sorted_status_counts(&HashMap::new()).is_empty());
}
