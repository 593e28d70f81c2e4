use super::*;

fn event(id: &str, name: &str) -> Event {
    Event { event_id: id.to_owned(), event_name: name.to_owned(), ..Event::default() }
}

fn loaded(names: &[&str]) -> EventsState {
    EventsState {
        items: names
            .iter()
            .enumerate()
            .map(|(i, name)| event(&format!("e{i}"), name))
            .collect(),
        ..EventsState::default()
    }
}

// =============================================================
// filter_events
// =============================================================

#[test]
fn filter_events_is_case_insensitive_substring() {
    let state = loaded(&["Blood Drive", "Coastal Clean-up", "Fun Run"]);
    let names = filter_events(&state.items, "DRIVE")
        .into_iter()
        .map(|e| e.event_name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Blood Drive"]);
}

#[test]
fn filter_events_empty_query_matches_all() {
    let state = loaded(&["A", "B"]);
    assert_eq!(filter_events(&state.items, "").len(), 2);
}

// =============================================================
// suggestions
// =============================================================

#[test]
fn suggestions_hidden_for_empty_query() {
    let mut state = loaded(&["Run 1", "Run 2"]);
    state.set_query(String::new());
    assert!(state.suggestions().is_empty());
}

#[test]
fn suggestions_truncate_to_limit() {
    let mut state = loaded(&["Run 1", "Run 2", "Run 3", "Run 4", "Run 5", "Run 6", "Run 7"]);
    state.set_query("run".to_owned());
    assert_eq!(state.suggestions().len(), SUGGESTION_LIMIT);
}

#[test]
fn commit_query_hides_suggestions_but_keeps_filter() {
    let mut state = loaded(&["Run 1", "Walk"]);
    state.set_query("run".to_owned());
    state.commit_query();
    assert!(state.suggestions().is_empty());
    assert_eq!(state.view(), EventsView::List(vec![event("e0", "Run 1")]));
}

// =============================================================
// view
// =============================================================

#[test]
fn view_prioritizes_loading_then_error() {
    let mut state = loaded(&["A"]);
    state.loading = true;
    state.error = Some("boom".to_owned());
    assert_eq!(state.view(), EventsView::Loading);
    state.loading = false;
    assert_eq!(state.view(), EventsView::Error("boom".to_owned()));
}

#[test]
fn view_empty_when_no_events_exist() {
    let mut state = EventsState::default();
    state.set_query("anything".to_owned());
    assert_eq!(state.view(), EventsView::Empty);
}

#[test]
fn view_shows_selected_event() {
    let mut state = loaded(&["Blood Drive", "Fun Run"]);
    state.select(event("e1", "Fun Run"));
    assert_eq!(state.query, "Fun Run");
    assert!(!state.show_suggestions);
    assert_eq!(state.view(), EventsView::Selected(event("e1", "Fun Run")));
}

#[test]
fn typing_clears_selection() {
    let mut state = loaded(&["Blood Drive", "Fun Run"]);
    state.select(event("e1", "Fun Run"));
    state.set_query("blood".to_owned());
    assert_eq!(state.selected, None);
    assert_eq!(state.view(), EventsView::List(vec![event("e0", "Blood Drive")]));
}

#[test]
fn view_not_found_when_search_misses() {
    let mut state = loaded(&["Blood Drive"]);
    state.set_query("zumba".to_owned());
    assert_eq!(state.view(), EventsView::NotFound);
}
