use super::*;

fn record(user: Option<&str>, event: &str, status: AvailabilityStatus) -> Availability {
    Availability {
        availability_id: None,
        user_id: user.map(str::to_owned),
        event_id: Some(event.to_owned()),
        event: None,
        availability: status,
        station_assignment: None,
    }
}

fn event(id: &str, name: &str) -> Event {
    Event { event_id: id.to_owned(), event_name: name.to_owned(), ..Event::default() }
}

use AvailabilityStatus::{Available, Unavailable};

// =============================================================
// status_map
// =============================================================

#[test]
fn status_map_only_uses_current_users_records() {
    let records = vec![
        record(Some("u1"), "e1", Available),
        record(Some("u2"), "e2", Unavailable),
        record(None, "e3", Unavailable),
    ];
    let map = status_map(&records, "u1");
    assert_eq!(map.get("e1"), Some(&Available));
    assert_eq!(map.get("e2"), None);
    assert_eq!(map.get("e3"), Some(&Unavailable));
}

#[test]
fn status_map_last_record_wins() {
    let records = vec![record(Some("u1"), "e1", Available), record(Some("u1"), "e1", Unavailable)];
    assert_eq!(status_map(&records, "u1").get("e1"), Some(&Unavailable));
}

// =============================================================
// duplicate_events
// =============================================================

#[test]
fn duplicate_events_counts_per_event_for_user() {
    let records = vec![
        record(Some("u1"), "e1", Available),
        record(Some("u1"), "e1", Unavailable),
        record(Some("u2"), "e2", Available),
        record(Some("u2"), "e2", Available),
        record(Some("u1"), "e3", Available),
    ];
    assert_eq!(duplicate_events(&records, "u1"), vec!["e1"]);
    assert_eq!(duplicate_events(&records, "u2"), vec!["e2"]);
}

// =============================================================
// AvailabilityState
// =============================================================

#[test]
fn load_reconciles_and_clears_loading() {
    let mut state = AvailabilityState::default();
    assert!(state.loading);
    state.load(
        "u1".to_owned(),
        vec![event("e1", "Fun Run"), event("e2", "Blood Drive")],
        &[record(Some("u1"), "e1", Available)],
    );
    assert!(!state.loading);
    assert_eq!(state.user_id.as_deref(), Some("u1"));
    assert_eq!(state.label_for("e1"), "AVAILABLE");
    assert_eq!(state.label_for("e2"), "Mark Availability");
}

#[test]
fn upsert_method_depends_on_existing_status() {
    let mut state = AvailabilityState::default();
    state.load("u1".to_owned(), Vec::new(), &[record(Some("u1"), "e1", Available)]);
    assert_eq!(state.upsert_method("e1"), UpsertMethod::Update);
    assert_eq!(state.upsert_method("e2"), UpsertMethod::Create);
}

#[test]
fn apply_override_switches_future_writes_to_update() {
    let mut state = AvailabilityState::default();
    state.load("u1".to_owned(), Vec::new(), &[]);
    state.apply_override("e2", Unavailable);
    assert_eq!(state.status_for("e2"), Some(Unavailable));
    assert_eq!(state.upsert_method("e2"), UpsertMethod::Update);
}

#[test]
fn payload_requires_known_user() {
    let state = AvailabilityState::default();
    assert_eq!(state.payload("e1", Available), None);

    let mut state = AvailabilityState::default();
    state.load("u1".to_owned(), Vec::new(), &[]);
    let payload = state.payload("e1", Available).unwrap();
    assert_eq!(payload.user_id, "u1");
    assert_eq!(payload.event_id, "e1");
    assert_eq!(payload.station_assignment, "");
}

#[test]
fn duplicate_warning_names_events() {
    let mut state = AvailabilityState::default();
    state.load(
        "u1".to_owned(),
        vec![event("e1", "Fun Run")],
        &[
            record(Some("u1"), "e1", Available),
            record(Some("u1"), "e1", Available),
            record(Some("u1"), "e9", Available),
            record(Some("u1"), "e9", Unavailable),
        ],
    );
    assert_eq!(
        state.duplicate_warning().as_deref(),
        Some("Duplicate availability records found for: Fun Run, e9")
    );
}

#[test]
fn duplicate_warning_none_without_duplicates() {
    let mut state = AvailabilityState::default();
    state.load("u1".to_owned(), Vec::new(), &[record(Some("u1"), "e1", Available)]);
    assert_eq!(state.duplicate_warning(), None);
}
