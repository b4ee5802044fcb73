use super::*;

// =============================================================
// Fallback labels
// =============================================================

#[test]
fn position_one_is_singular() {
    assert_eq!(resolve(1, &[]), "1 Star");
}

#[test]
fn positions_beyond_one_are_plural() {
    assert_eq!(resolve(2, &[]), "2 Stars");
    assert_eq!(resolve(5, &[]), "5 Stars");
    assert_eq!(resolve(10, &[]), "10 Stars");
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn override_wins_when_present() {
    let overrides = ["Bad".to_owned(), "Great".to_owned()];
    assert_eq!(resolve(1, &overrides), "Bad");
    assert_eq!(resolve(2, &overrides), "Great");
}

#[test]
fn empty_override_falls_back() {
    let overrides = ["Bad".to_owned(), String::new(), String::new()];
    assert_eq!(resolve(1, &overrides), "Bad");
    assert_eq!(resolve(2, &overrides), "2 Stars");
    assert_eq!(resolve(3, &overrides), "3 Stars");
}

#[test]
fn position_past_override_list_falls_back() {
    let overrides = ["Bad".to_owned()];
    assert_eq!(resolve(2, &overrides), "2 Stars");
}
