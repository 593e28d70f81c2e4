use super::*;
use crate::net::types::{Assignment, Availability};

fn summary(id: &str, name: &str) -> EventSummary {
    EventSummary {
        event_id: id.to_owned(),
        event_name: name.to_owned(),
        date: "2025-05-01".to_owned(),
        location: "Plaza".to_owned(),
    }
}

fn availability(event_id: &str, status: AvailabilityStatus) -> Availability {
    Availability {
        availability_id: None,
        user_id: Some("u1".to_owned()),
        event_id: None,
        event: Some(summary(event_id, "")),
        availability: status,
        station_assignment: None,
    }
}

fn assignment(id: &str, event: Option<EventSummary>) -> Assignment {
    Assignment { assignment_id: id.to_owned(), event }
}

#[test]
fn available_assignments_requires_available_entry() {
    let user = Volunteer {
        user_id: "u1".to_owned(),
        assignments: vec![
            assignment("a1", Some(summary("e1", "Fun Run"))),
            assignment("a2", Some(summary("e2", "Blood Drive"))),
            assignment("a3", Some(summary("e3", "Clean-up"))),
            assignment("a4", None),
        ],
        availability: vec![
            availability("e1", AvailabilityStatus::Available),
            availability("e2", AvailabilityStatus::Unavailable),
        ],
        ..Volunteer::default()
    };
    let names = available_assignments(&user)
        .into_iter()
        .map(|e| e.event_name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Fun Run"]);
}

#[test]
fn available_assignments_matches_flat_event_id() {
    let mut record = availability("ignored", AvailabilityStatus::Available);
    record.event = None;
    record.event_id = Some("e1".to_owned());
    let user = Volunteer {
        assignments: vec![assignment("a1", Some(summary("e1", "Fun Run")))],
        availability: vec![record],
        ..Volunteer::default()
    };
    assert_eq!(available_assignments(&user).len(), 1);
}

#[test]
fn assignment_line_uses_short_date() {
    assert_eq!(assignment_line(&summary("e1", "Fun Run")), "Fun Run — 5/1/2025");
}

#[test]
fn profile_state_starts_loading() {
    let state = ProfileState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}
