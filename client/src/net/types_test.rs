use super::*;

// =============================================================
// AvailabilityStatus
// =============================================================

#[test]
fn availability_status_uses_uppercase_wire_names() {
    assert_eq!(serde_json::to_string(&AvailabilityStatus::Available).unwrap(), "\"AVAILABLE\"");
    assert_eq!(
        serde_json::from_str::<AvailabilityStatus>("\"UNAVAILABLE\"").unwrap(),
        AvailabilityStatus::Unavailable
    );
    assert_eq!(AvailabilityStatus::Available.as_str(), "AVAILABLE");
    assert_eq!(AvailabilityStatus::Unavailable.label(), "Unavailable");
}

// =============================================================
// Event
// =============================================================

#[test]
fn event_accepts_numeric_ids_and_missing_optionals() {
    let event: Event = serde_json::from_value(serde_json::json!({
        "event_id": 42,
        "event_name": "Clean-up Drive",
        "date": "2025-05-01"
    }))
    .unwrap();
    assert_eq!(event.event_id, "42");
    assert_eq!(event.admin_id, None);
    assert_eq!(event.location, "");
    assert_eq!(event.status, None);
}

#[test]
fn event_title_prefers_name_then_event_name() {
    let mut event = Event { event_id: "e1".to_owned(), event_name: "Fallback".to_owned(), ..Event::default() };
    assert_eq!(event.title(), "Fallback");
    event.name = Some("Preferred".to_owned());
    assert_eq!(event.title(), "Preferred");
    event.name = Some(String::new());
    event.event_name = String::new();
    assert_eq!(event.title(), "Unnamed Event");
}

#[test]
fn event_status_parses_lowercase() {
    let event: Event = serde_json::from_value(serde_json::json!({
        "event_id": "e1",
        "status": "completed"
    }))
    .unwrap();
    assert_eq!(event.status, Some(EventStatus::Completed));
}

// =============================================================
// Volunteer
// =============================================================

#[test]
fn volunteer_defaults_nested_arrays() {
    let v: Volunteer = serde_json::from_value(serde_json::json!({
        "user_id": "u1",
        "first_name": "Ana",
        "last_name": "Cruz",
        "email": "ana@example.com"
    }))
    .unwrap();
    assert!(v.assignments.is_empty());
    assert!(v.availability.is_empty());
    assert_eq!(v.display_name(), "Ana Cruz");
}

#[test]
fn volunteer_display_name_prefers_full_name() {
    let v = Volunteer {
        user_id: "u1".to_owned(),
        first_name: "Ana".to_owned(),
        full_name: Some("Ana Maria Cruz".to_owned()),
        ..Volunteer::default()
    };
    assert_eq!(v.display_name(), "Ana Maria Cruz");
}

#[test]
fn volunteer_parses_nested_assignments_and_availability() {
    let v: Volunteer = serde_json::from_value(serde_json::json!({
        "user_id": "u1",
        "email": "a@b.com",
        "assignments": [
            { "assignment_id": 7, "event": { "event_id": "e1", "event_name": "Fun Run", "date": "2025-06-01" } }
        ],
        "availability": [
            { "availability_id": "av1", "availability": "AVAILABLE", "event": { "event_id": "e1", "event_name": "Fun Run" } }
        ]
    }))
    .unwrap();
    assert_eq!(v.assignments[0].assignment_id, "7");
    assert_eq!(v.availability[0].event_ref(), Some("e1"));
}

// =============================================================
// Availability
// =============================================================

#[test]
fn availability_event_ref_prefers_flat_id() {
    let a: Availability = serde_json::from_value(serde_json::json!({
        "event_id": "flat",
        "availability": "UNAVAILABLE",
        "event": { "event_id": "nested" }
    }))
    .unwrap();
    assert_eq!(a.event_ref(), Some("flat"));
}

#[test]
fn availability_null_ids_become_none() {
    let a: Availability = serde_json::from_value(serde_json::json!({
        "user_id": null,
        "availability": "AVAILABLE"
    }))
    .unwrap();
    assert_eq!(a.user_id, None);
    assert_eq!(a.event_ref(), None);
}

#[test]
fn id_rejects_non_scalar_values() {
    let err = serde_json::from_value::<AdminRecord>(serde_json::json!({
        "admin_id": { "nested": true },
        "user_id": "u1"
    }));
    assert!(err.is_err());
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn availability_payload_serializes_status_uppercase() {
    let payload = AvailabilityPayload {
        event_id: "e1".to_owned(),
        user_id: "u1".to_owned(),
        station_assignment: String::new(),
        availability: AvailabilityStatus::Available,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "event_id": "e1",
            "user_id": "u1",
            "station_assignment": "",
            "availability": "AVAILABLE"
        })
    );
}

#[test]
fn availability_status_from_wire_round_trips_menu_values() {
    for status in AvailabilityStatus::ALL {
        assert_eq!(AvailabilityStatus::from_wire(status.as_str()), Some(status));
    }
    assert_eq!(AvailabilityStatus::from_wire("available"), None);
}
