//! Create-event form for admins.
//!
//! The form needs the signed-in admin's `admin_id`, resolved in two steps:
//! provider email → backend user → admin row.

#[cfg(test)]
#[path = "create_event_test.rs"]
mod create_event_test;

use chrono::FixedOffset;
use leptos::prelude::*;

use crate::components::input_field::InputField;
use crate::net::types::{AdminRecord, NewEvent};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::dates::to_utc_iso;

/// Admin id belonging to backend user `user_id`.
pub fn find_admin_id(admins: &[AdminRecord], user_id: &str) -> Option<String> {
    admins.iter().find(|a| a.user_id == user_id).map(|a| a.admin_id.clone())
}

/// Raw form values, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub description: String,
}

impl EventForm {
    /// Build the request body, converting start/end to UTC at `offset`.
    pub fn to_new_event(&self, admin_id: &str, offset: FixedOffset) -> Result<NewEvent, &'static str> {
        let fields = [&self.name, &self.date, &self.start_time, &self.end_time, &self.location, &self.description];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err("All fields are required.");
        }
        if admin_id.is_empty() {
            return Err("Admin not found for this user.");
        }
        let start_time = to_utc_iso(&self.date, &self.start_time, offset).ok_or("Invalid start time.")?;
        let end_time = to_utc_iso(&self.date, &self.end_time, offset).ok_or("Invalid end time.")?;
        Ok(NewEvent {
            admin_id: admin_id.to_owned(),
            event_name: self.name.trim().to_owned(),
            date: self.date.trim().to_owned(),
            start_time,
            end_time,
            location: self.location.trim().to_owned(),
            description: self.description.trim().to_owned(),
        })
    }
}

#[component]
pub fn CreateEventPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let admin_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let created = RwSignal::new(false);

    let email = auth.with_untracked(AuthState::email);
    #[cfg(feature = "hydrate")]
    {
        if let Some(email) = email {
            leptos::task::spawn_local(async move {
                use crate::net::api;
                use crate::util::toast;

                let user = match api::fetch_user_by_email(&email).await {
                    Ok(user) if !user.user_id.is_empty() => user,
                    Ok(_) => {
                        toast::error(toasts, "User ID not found");
                        return;
                    }
                    Err(e) => {
                        log::error!("user lookup failed: {e}");
                        toast::error(toasts, "Error fetching user/admin info");
                        return;
                    }
                };
                match api::fetch_admins().await {
                    Ok(admins) => match find_admin_id(&admins, &user.user_id) {
                        Some(id) => admin_id.set(id),
                        None => toast::error(toasts, "Admin not found for this user."),
                    },
                    Err(e) => {
                        log::error!("admin lookup failed: {e}");
                        toast::error(toasts, "Error fetching user/admin info");
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = email;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = EventForm {
            name: name.get(),
            date: date.get(),
            start_time: start_time.get(),
            end_time: end_time.get(),
            location: location.get(),
            description: description.get(),
        };
        let offset = *chrono::Local::now().offset();
        let payload = match form.to_new_event(&admin_id.get(), offset) {
            Ok(payload) => payload,
            Err(message) => {
                crate::util::toast::error(toasts, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_event(&payload).await {
                Ok(()) => {
                    crate::util::toast::success(toasts, "Event created!");
                    created.set(true);
                }
                Err(e) => {
                    log::error!("create event failed: {e}");
                    crate::util::toast::error(toasts, "Failed to create event");
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    Effect::new(move || {
        if created.get() {
            navigate("/admin", leptos_router::NavigateOptions::default());
        }
    });

    view! {
        <section class="page create-event">
            <form class="event-form" on:submit=on_submit>
                <InputField label="Event Name" value=name required=true/>
                <InputField label="Date" value=date input_type="date" required=true/>
                <div class="event-form__row">
                    <InputField label="Start Time" value=start_time input_type="time" required=true/>
                    <InputField label="End Time" value=end_time input_type="time" required=true/>
                </div>
                <InputField label="Location" value=location required=true/>
                <InputField label="Event Description" value=description required=true/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "SUBMIT"
                </button>
            </form>
        </section>
    }
}
