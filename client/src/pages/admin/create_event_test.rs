use super::*;

fn form() -> EventForm {
    EventForm {
        name: " Fun Run ".to_owned(),
        date: "2025-05-01".to_owned(),
        start_time: "08:00".to_owned(),
        end_time: "10:30".to_owned(),
        location: "Plaza".to_owned(),
        description: "5k for charity".to_owned(),
    }
}

fn manila() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).unwrap()
}

#[test]
fn find_admin_id_matches_user() {
    let admins = vec![
        AdminRecord { admin_id: "a1".to_owned(), user_id: "u1".to_owned() },
        AdminRecord { admin_id: "a2".to_owned(), user_id: "u2".to_owned() },
    ];
    assert_eq!(find_admin_id(&admins, "u2").as_deref(), Some("a2"));
    assert_eq!(find_admin_id(&admins, "u3"), None);
}

#[test]
fn to_new_event_converts_times_to_utc() {
    let event = form().to_new_event("a1", manila()).unwrap();
    assert_eq!(event.admin_id, "a1");
    assert_eq!(event.event_name, "Fun Run");
    assert_eq!(event.date, "2025-05-01");
    assert_eq!(event.start_time, "2025-05-01T00:00:00.000Z");
    assert_eq!(event.end_time, "2025-05-01T02:30:00.000Z");
}

#[test]
fn to_new_event_requires_every_field() {
    let mut missing = form();
    missing.location = "  ".to_owned();
    assert_eq!(missing.to_new_event("a1", manila()), Err("All fields are required."));
}

#[test]
fn to_new_event_requires_admin() {
    assert_eq!(form().to_new_event("", manila()), Err("Admin not found for this user."));
}

#[test]
fn to_new_event_rejects_bad_time() {
    let mut bad = form();
    bad.end_time = "late".to_owned();
    assert_eq!(bad.to_new_event("a1", manila()), Err("Invalid end time."));
}
