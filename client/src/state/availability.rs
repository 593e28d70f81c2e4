//! Volunteer availability state: reconciliation, duplicates, local overrides.
//!
//! DESIGN
//! ======
//! The events list and the availability records arrive from two calls. The
//! per-event status map is rebuilt from the current user's records, and then
//! patched locally after each successful write instead of refetching.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use std::collections::BTreeMap;

use crate::net::types::{Availability, AvailabilityPayload, AvailabilityStatus, Event};

/// How an availability change must be sent to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertMethod {
    /// `POST /availability/`: no record yet.
    Create,
    /// `PUT /availability/{user}/{event}`.
    Update,
}

fn belongs_to(record: &Availability, user_id: &str) -> bool {
    record.user_id.as_deref().map_or(true, |owner| owner == user_id)
}

/// Status per event id for `user_id`. Later records win.
pub fn status_map(records: &[Availability], user_id: &str) -> BTreeMap<String, AvailabilityStatus> {
    records
        .iter()
        .filter(|r| belongs_to(r, user_id))
        .filter_map(|r| r.event_ref().map(|event_id| (event_id.to_owned(), r.availability)))
        .collect()
}

/// Event ids for which `user_id` has more than one record.
pub fn duplicate_events(records: &[Availability], user_id: &str) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for event_id in records
        .iter()
        .filter(|r| belongs_to(r, user_id))
        .filter_map(Availability::event_ref)
    {
        *counts.entry(event_id).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(event_id, _)| event_id.to_owned())
        .collect()
}

#[derive(Clone, Debug)]
pub struct AvailabilityState {
    /// Backend user id of the signed-in volunteer.
    pub user_id: Option<String>,
    pub events: Vec<Event>,
    pub statuses: BTreeMap<String, AvailabilityStatus>,
    pub duplicates: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AvailabilityState {
    fn default() -> Self {
        Self {
            user_id: None,
            events: Vec::new(),
            statuses: BTreeMap::new(),
            duplicates: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl AvailabilityState {
    /// Install freshly fetched events and records for `user_id`.
    pub fn load(&mut self, user_id: String, events: Vec<Event>, records: &[Availability]) {
        self.statuses = status_map(records, &user_id);
        self.duplicates = duplicate_events(records, &user_id);
        self.user_id = Some(user_id);
        self.events = events;
        self.loading = false;
        self.error = None;
    }

    pub fn status_for(&self, event_id: &str) -> Option<AvailabilityStatus> {
        self.statuses.get(event_id).copied()
    }

    /// Button label: the current status or a prompt.
    pub fn label_for(&self, event_id: &str) -> &'static str {
        self.status_for(event_id)
            .map_or("Mark Availability", AvailabilityStatus::as_str)
    }

    pub fn upsert_method(&self, event_id: &str) -> UpsertMethod {
        if self.statuses.contains_key(event_id) { UpsertMethod::Update } else { UpsertMethod::Create }
    }

    /// Request body for changing `event_id` to `status`, if the user is known.
    pub fn payload(&self, event_id: &str, status: AvailabilityStatus) -> Option<AvailabilityPayload> {
        self.user_id.as_ref().map(|user_id| AvailabilityPayload {
            event_id: event_id.to_owned(),
            user_id: user_id.clone(),
            station_assignment: String::new(),
            availability: status,
        })
    }

    /// Record a successful write locally.
    pub fn apply_override(&mut self, event_id: &str, status: AvailabilityStatus) {
        self.statuses.insert(event_id.to_owned(), status);
    }

    /// Warning text listing events with duplicate records, by name when known.
    pub fn duplicate_warning(&self) -> Option<String> {
        if self.duplicates.is_empty() {
            return None;
        }
        let names = self
            .duplicates
            .iter()
            .map(|id| {
                self.events
                    .iter()
                    .find(|e| &e.event_id == id)
                    .map_or_else(|| id.clone(), |e| e.title().to_owned())
            })
            .collect::<Vec<_>>();
        Some(format!("Duplicate availability records found for: {}", names.join(", ")))
    }
}
