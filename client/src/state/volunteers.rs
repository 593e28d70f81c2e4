//! Volunteer roster helpers for the assign-volunteers screen.

#[cfg(test)]
#[path = "volunteers_test.rs"]
mod volunteers_test;

use leptos::prelude::{Get, Memo, RwSignal, With};

use crate::net::types::{AvailabilityStatus, Volunteer};

/// Volunteers whose full name contains `term`, sorted by lowercased name.
pub fn search_volunteers(users: &[Volunteer], term: &str) -> Vec<Volunteer> {
    let needle = term.to_lowercase();
    let mut matches = users
        .iter()
        .map(|user| (user.display_name().to_lowercase(), user))
        .filter(|(name, _)| name.contains(&needle))
        .collect::<Vec<_>>();
    matches.sort_by(|(a, _), (b, _)| a.cmp(b));
    matches.into_iter().map(|(_, user)| user.clone()).collect()
}

/// Names of the events a volunteer is already assigned to.
pub fn assigned_event_names(user: &Volunteer) -> Vec<String> {
    user.assignments
        .iter()
        .map(|a| {
            a.event
                .as_ref()
                .map(|e| e.event_name.trim())
                .filter(|name| !name.is_empty())
                .unwrap_or("Unnamed Event")
                .to_owned()
        })
        .collect()
}

/// An event the volunteer can still be assigned to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignableEvent {
    pub event_id: String,
    /// `"name - location"`.
    pub label: String,
}

/// Events the volunteer marked AVAILABLE and is not yet assigned to.
pub fn assignable_events(user: &Volunteer) -> Vec<AssignableEvent> {
    let assigned = user
        .assignments
        .iter()
        .filter_map(|a| a.event.as_ref().map(|e| e.event_id.as_str()))
        .collect::<Vec<_>>();
    user.availability
        .iter()
        .filter(|a| a.availability == AvailabilityStatus::Available)
        .filter_map(|a| a.event.as_ref())
        .filter(|event| !assigned.contains(&event.event_id.as_str()))
        .map(|event| AssignableEvent {
            event_id: event.event_id.clone(),
            label: format!("{} - {}", event.event_name, event.location),
        })
        .collect()
}

/// Assign-volunteers screen state.
#[derive(Clone, Debug)]
pub struct VolunteersState {
    pub users: Vec<Volunteer>,
    pub loading: bool,
    pub search: String,
    /// Bumped after each successful assignment to trigger a refetch.
    pub refetch_seq: u64,
}

impl Default for VolunteersState {
    fn default() -> Self {
        Self { users: Vec::new(), loading: true, search: String::new(), refetch_seq: 0 }
    }
}

impl VolunteersState {
    pub fn visible(&self) -> Vec<Volunteer> {
        search_volunteers(&self.users, &self.search)
    }
}

/// Tracks only `refetch_seq`, so loading, search and user updates leave
/// subscribers alone.
pub fn refetch_trigger(state: RwSignal<VolunteersState>) -> Memo<u64> {
    Memo::new(move |_| state.with(|s| s.refetch_seq))
}
