//! Volunteer event list with per-event availability.

use leptos::prelude::*;

use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::event_card::EventCard;
use crate::net::types::AvailabilityStatus;
use crate::state::auth::AuthState;
use crate::state::availability::AvailabilityState;
use crate::state::toast::ToastState;

fn status_options() -> Vec<DropdownOption> {
    AvailabilityStatus::ALL
        .into_iter()
        .map(|s| DropdownOption { value: s.as_str().to_owned(), label: s.label().to_owned() })
        .collect()
}

#[component]
pub fn VolunteerEventsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(AvailabilityState::default());

    let email = auth.with_untracked(AuthState::email);
    #[cfg(feature = "hydrate")]
    {
        if let Some(email) = email {
            leptos::task::spawn_local(async move {
                use crate::net::api;

                let loaded = async {
                    let user = api::fetch_user_by_email(&email).await?;
                    let (events, records) = futures::join!(api::fetch_events(false), api::fetch_availability());
                    Ok::<_, crate::net::error::ApiError>((user.user_id, events?, records?))
                };
                match loaded.await {
                    Ok((user_id, events, records)) => state.update(|s| s.load(user_id, events, &records)),
                    Err(e) => {
                        log::error!("availability load failed: {e}");
                        state.update(|s| {
                            s.error = Some("Failed to load data.".to_owned());
                            s.loading = false;
                        });
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = email;

    let change = Callback::new(move |(event_id, raw): (String, String)| {
        let Some(status) = AvailabilityStatus::from_wire(&raw) else {
            return;
        };
        let Some(payload) = state.with_untracked(|s| s.payload(&event_id, status)) else {
            return;
        };
        let method = state.with_untracked(|s| s.upsert_method(&event_id));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::availability::UpsertMethod;

            let result = match method {
                UpsertMethod::Create => crate::net::api::create_availability(&payload).await,
                UpsertMethod::Update => crate::net::api::update_availability(&payload).await,
            };
            match result {
                Ok(()) => state.update(|s| s.apply_override(&event_id, status)),
                Err(e) => {
                    log::error!("availability update failed: {e}");
                    crate::util::toast::error(toasts, e.detail_or("Failed to update availability"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, method, toasts);
    });

    let body = move || {
        let current = state.get();
        if current.loading {
            return view! { <p class="notice">"Loading events..."</p> }.into_any();
        }
        if let Some(error) = current.error.clone() {
            return view! { <p class="notice notice--error">{error}</p> }.into_any();
        }
        let warning = current.duplicate_warning();
        let cards = current
            .events
            .iter()
            .cloned()
            .map(|event| {
                let event_id = event.event_id.clone();
                let label_id = event_id.clone();
                let label = Signal::derive(move || state.with(|s| s.label_for(&label_id).to_owned()));
                let on_select = Callback::new(move |raw: String| change.run((event_id.clone(), raw)));
                view! {
                    <EventCard event=event>
                        <Dropdown label=label options=status_options() on_select=on_select/>
                    </EventCard>
                }
            })
            .collect_view();
        view! {
            {warning.map(|w| view! { <p class="notice notice--warning">{w}</p> })}
            <div class="event-list">{cards}</div>
        }
        .into_any()
    };

    view! { <section class="page volunteer-events">{body}</section> }
}
