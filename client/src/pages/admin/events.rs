//! Admin event list with search suggestions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::event_card::EventCard;
use crate::net::types::Event;
use crate::state::events::{EventsState, EventsView};

#[component]
pub fn AdminEventsPage() -> impl IntoView {
    let state = RwSignal::new(EventsState { loading: true, ..EventsState::default() });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_events(false).await {
            Ok(items) => state.update(|s| s.items = items),
            Err(e) => {
                log::error!("events fetch failed: {e}");
                state.update(|s| s.error = Some(e.detail_or("Failed to fetch events")));
            }
        }
        state.update(|s| s.loading = false);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            state.update(EventsState::commit_query);
        }
    };

    let card = |event: Event| {
        let href = format!("/admin/events/edit/{}", event.event_id);
        view! {
            <EventCard event=event>
                <A href=href attr:class="btn">"Edit"</A>
            </EventCard>
        }
    };

    let body = move || match state.with(EventsState::view) {
        EventsView::Loading => view! { <p class="notice">"Loading..."</p> }.into_any(),
        EventsView::Error(error) => view! { <p class="notice notice--error">{format!("Error: {error}")}</p> }.into_any(),
        EventsView::Empty => view! { <p class="notice">"No Scheduled Events Yet."</p> }.into_any(),
        EventsView::NotFound => view! { <p class="notice">"Event Not Found."</p> }.into_any(),
        EventsView::Selected(event) => card(event).into_any(),
        EventsView::List(events) => events.into_iter().map(card).collect_view().into_any(),
    };

    view! {
        <section class="page admin-events">
            <div class="search">
                <input
                    class="search__input"
                    type="text"
                    placeholder="Search event name..."
                    prop:value=move || state.get().query
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <Show when=move || !state.with(EventsState::suggestions).is_empty()>
                    <ul class="search__suggestions">
                        {move || {
                            state
                                .with(EventsState::suggestions)
                                .into_iter()
                                .map(|event| {
                                    let title = event.title().to_owned();
                                    view! {
                                        <li
                                            class="search__suggestion"
                                            on:click=move |_| state.update(|s| s.select(event.clone()))
                                        >
                                            {title}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
            <div class="event-list">{body}</div>
            <A href="/admin/events/create" attr:class="fab">
                <span class="fab__icon">"+"</span>
                <span class="fab__label">"Add an Event"</span>
            </A>
        </section>
    }
}
