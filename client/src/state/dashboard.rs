//! Admin dashboard summary: counts and the featured upcoming event.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::net::types::{Event, EventStatus};
use crate::util::dates::days_until;

/// Fill in display defaults the backend may leave out.
pub fn normalize_event(mut event: Event, today: NaiveDate) -> Event {
    event.event_name = event.title().to_owned();
    event.name = None;
    if event.status.is_none() {
        event.status = Some(EventStatus::Upcoming);
    }
    if event.date.trim().is_empty() {
        event.date = today.format("%Y-%m-%d").to_string();
    }
    if event.location.trim().is_empty() {
        "Location not specified".clone_into(&mut event.location);
    }
    if event.description.trim().is_empty() {
        "No description available".clone_into(&mut event.description);
    }
    event
}

/// Order event ids numerically when both are integers, textually otherwise.
pub fn compare_event_ids(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// The upcoming event with the greatest id (ids grow with creation time).
pub fn pick_upcoming(events: &[Event]) -> Option<&Event> {
    events
        .iter()
        .filter(|e| matches!(e.status, None | Some(EventStatus::Upcoming)))
        .max_by(|a, b| compare_event_ids(&a.event_id, &b.event_id))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_volunteers: usize,
    pub total_events: usize,
    pub upcoming: Option<Event>,
    pub days_remaining: Option<i64>,
}

impl DashboardSummary {
    pub fn build(volunteer_count: usize, events: Vec<Event>, today: NaiveDate) -> Self {
        let events = events
            .into_iter()
            .map(|e| normalize_event(e, today))
            .collect::<Vec<_>>();
        let upcoming = pick_upcoming(&events).cloned();
        let days_remaining = upcoming.as_ref().and_then(|e| days_until(&e.date, today));
        Self { total_volunteers: volunteer_count, total_events: events.len(), upcoming, days_remaining }
    }

    pub fn days_label(&self) -> String {
        self.days_remaining
            .map_or_else(|| "Date not specified".to_owned(), |days| format!("{days} days left till event"))
    }
}

/// Dashboard screen state.
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub summary: DashboardSummary,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { loading: true, error: None, summary: DashboardSummary::default() }
    }
}
