//! Volunteer profile helpers.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{AvailabilityStatus, EventSummary, Volunteer};
use crate::util::dates::format_short_date;

/// Assigned events the volunteer is also marked AVAILABLE for.
pub fn available_assignments(user: &Volunteer) -> Vec<EventSummary> {
    user.assignments
        .iter()
        .filter_map(|a| a.event.as_ref())
        .filter(|event| {
            user.availability.iter().any(|av| {
                av.availability == AvailabilityStatus::Available
                    && av.event_ref() == Some(event.event_id.as_str())
            })
        })
        .cloned()
        .collect()
}

/// One profile list line: `"name — 5/1/2025"`.
pub fn assignment_line(event: &EventSummary) -> String {
    format!("{} — {}", event.event_name, format_short_date(&event.date))
}

/// Profile screen state.
#[derive(Clone, Debug)]
pub struct ProfileState {
    pub user: Option<Volunteer>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}
