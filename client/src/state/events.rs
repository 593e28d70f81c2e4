//! Admin event-list state: search, suggestions, and selection.
//!
//! DESIGN
//! ======
//! The page renders exactly one of several mutually exclusive views; deciding
//! which lives in [`EventsState::view`] so the rules are testable without a
//! browser.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::net::types::Event;

/// Maximum number of search suggestions shown under the search box.
pub const SUGGESTION_LIMIT: usize = 5;

/// Events whose display name contains `query`, case-insensitively.
pub fn filter_events(events: &[Event], query: &str) -> Vec<Event> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|event| event.title().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What the events page should render.
#[derive(Clone, Debug, PartialEq)]
pub enum EventsView {
    Loading,
    Error(String),
    /// No events exist at all.
    Empty,
    Selected(Event),
    /// Events exist but none match the search.
    NotFound,
    List(Vec<Event>),
}

#[derive(Clone, Debug, Default)]
pub struct EventsState {
    pub items: Vec<Event>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
    pub show_suggestions: bool,
    pub selected: Option<Event>,
}

impl EventsState {
    /// Typing in the search box reopens suggestions and drops any selection.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.show_suggestions = true;
        self.selected = None;
    }

    /// Enter in the search box: keep the filter, close suggestions.
    pub fn commit_query(&mut self) {
        self.show_suggestions = false;
        self.selected = None;
    }

    /// Picking a suggestion shows just that event.
    pub fn select(&mut self, event: Event) {
        self.query = event.title().to_owned();
        self.selected = Some(event);
        self.show_suggestions = false;
    }

    pub fn filtered(&self) -> Vec<Event> {
        filter_events(&self.items, &self.query)
    }

    pub fn suggestions(&self) -> Vec<Event> {
        if self.query.is_empty() || !self.show_suggestions {
            return Vec::new();
        }
        let mut matches = self.filtered();
        matches.truncate(SUGGESTION_LIMIT);
        matches
    }

    pub fn view(&self) -> EventsView {
        if self.loading {
            return EventsView::Loading;
        }
        if let Some(error) = &self.error {
            return EventsView::Error(error.clone());
        }
        if self.items.is_empty() {
            return EventsView::Empty;
        }
        if let Some(selected) = &self.selected {
            return EventsView::Selected(selected.clone());
        }
        let filtered = self.filtered();
        if filtered.is_empty() { EventsView::NotFound } else { EventsView::List(filtered) }
    }
}
