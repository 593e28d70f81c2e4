//! Card showing one event's details, with an optional action slot.

use leptos::prelude::*;

use crate::net::types::Event;
use crate::util::dates::format_long_date;

#[component]
pub fn EventCard(event: Event, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let title = event.title().to_owned();
    let date = format_long_date(&event.date);

    view! {
        <article class="event-card">
            <h3 class="event-card__name">{title}</h3>
            <p class="event-card__location">{event.location}</p>
            <p class="event-card__date">{date}</p>
            <p class="event-card__description">{event.description}</p>
            <div class="event-card__actions">{children.map(|c| c())}</div>
        </article>
    }
}
