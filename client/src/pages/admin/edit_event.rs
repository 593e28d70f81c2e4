//! Edit an existing event's name, date, location, and description.

#[cfg(test)]
#[path = "edit_event_test.rs"]
mod edit_event_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::input_field::InputField;
use crate::components::loader::Loader;
use crate::net::types::{Event, EventUpdate};
use crate::util::dates::date_input_value;

/// Delay before returning to the list after a successful save.
pub const RETURN_DELAY_MS: u32 = 2_000;

/// Form values for an existing event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub event_name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl EditForm {
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_name: event.title().to_owned(),
            date: date_input_value(&event.date).to_owned(),
            location: event.location.clone(),
            description: event.description.clone(),
        }
    }

    pub fn to_update(&self) -> EventUpdate {
        EventUpdate {
            event_name: self.event_name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            date: self.date.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    Editing,
    Missing,
    Failed(String),
}

#[component]
pub fn EditEventPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = leptos_router::hooks::use_navigate();
    let event_id = params.with_untracked(|p| p.get("id")).filter(|id| !id.is_empty());

    let phase = RwSignal::new(Phase::Loading);
    let event_name = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let success = RwSignal::new(None::<&'static str>);
    let leave = RwSignal::new(false);

    match event_id.clone() {
        None => phase.set(Phase::Failed("Missing event ID.".to_owned())),
        Some(id) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_event(&id).await {
                    Ok(event) => {
                        let form = EditForm::from_event(&event);
                        event_name.set(form.event_name);
                        date.set(form.date);
                        location.set(form.location);
                        description.set(form.description);
                        phase.set(Phase::Editing);
                    }
                    Err(crate::net::error::ApiError::Status { status: 404, .. }) => phase.set(Phase::Missing),
                    Err(e) => {
                        log::error!("event fetch failed: {e}");
                        phase.set(Phase::Failed(e.detail_or("Failed to fetch event data")));
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = id;
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let Some(id) = event_id.clone() else {
            return;
        };
        let update = EditForm {
            event_name: event_name.get(),
            date: date.get(),
            location: location.get(),
            description: description.get(),
        }
        .to_update();
        saving.set(true);
        success.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_event(&id, &update).await {
                Ok(()) => {
                    success.set(Some("Event updated successfully!"));
                    saving.set(false);
                    gloo_timers::future::TimeoutFuture::new(RETURN_DELAY_MS).await;
                    leave.set(true);
                }
                Err(e) => {
                    log::error!("event update failed: {e}");
                    phase.set(Phase::Failed(e.detail_or("Failed to update event")));
                    saving.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, update);
    };

    Effect::new(move || {
        if leave.get() {
            navigate("/admin/events", leptos_router::NavigateOptions::default());
        }
    });

    let back = || view! { <A href="/admin/events" attr:class="btn">"Return to Events"</A> };

    let body = move || match phase.get() {
        Phase::Loading => view! { <Loader text="event"/> }.into_any(),
        Phase::Failed(error) => view! {
            <div class="notice notice--error">
                <p>{error}</p>
                {back()}
            </div>
        }
        .into_any(),
        Phase::Missing => view! {
            <div class="notice">
                <p>"Event not found"</p>
                {back()}
            </div>
        }
        .into_any(),
        Phase::Editing => view! {
            <form class="event-form" on:submit=on_submit.clone()>
                <InputField label="Event Name" value=event_name required=true/>
                <InputField label="Date" value=date input_type="date" required=true/>
                <InputField label="Location" value=location required=true/>
                <InputField label="Event Description" value=description multiline=true/>
                <Show when=move || success.get().is_some()>
                    <p class="notice notice--success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <div class="event-form__actions">
                    <A href="/admin/events" attr:class="btn btn--ghost">"Cancel"</A>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Submit" }}
                    </button>
                </div>
            </form>
        }
        .into_any(),
    };

    view! { <section class="page edit-event">{body}</section> }
}
