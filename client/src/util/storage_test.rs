use super::*;

#[test]
fn clean_email_trims_whitespace() {
    assert_eq!(clean_email("  ana@example.com \n").as_deref(), Some("ana@example.com"));
}

#[test]
fn clean_email_rejects_blank_and_malformed_values() {
    assert_eq!(clean_email("   "), None);
    assert_eq!(clean_email("not-an-email"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn last_email_is_empty_outside_the_browser() {
    remember_email("ana@example.com");
    assert_eq!(last_email(), None);
}
