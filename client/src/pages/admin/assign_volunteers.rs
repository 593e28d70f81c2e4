//! Assign volunteers to events they marked themselves available for.

use leptos::prelude::*;

use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::loader::Loader;
use crate::net::types::Volunteer;
use crate::state::toast::ToastState;
use crate::state::volunteers::{VolunteersState, assignable_events, assigned_event_names, refetch_trigger};

#[component]
pub fn AssignVolunteersPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(VolunteersState::default());

    let refetch = refetch_trigger(state);

    Effect::new(move || {
        let _seq = refetch.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(users) => state.update(|s| s.users = users),
                Err(e) => {
                    log::error!("users fetch failed: {e}");
                    crate::util::toast::error(toasts, "Failed to load users");
                }
            }
            state.update(|s| s.loading = false);
        });
    });

    let assign = Callback::new(move |(event_id, user_id): (String, String)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let body = crate::net::types::NewAssignment { event_id, user_id };
            match crate::net::api::create_assignment(&body).await {
                Ok(()) => {
                    state.update(|s| s.refetch_seq += 1);
                    crate::util::toast::success(toasts, "Volunteer assigned successfully!");
                }
                Err(e) => {
                    log::error!("assignment failed: {e}");
                    crate::util::toast::error(toasts, "Failed to assign volunteer.");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (event_id, user_id, toasts);
    });

    let body = move || {
        if state.with(|s| s.loading) {
            return view! { <Loader text="Users"/> }.into_any();
        }
        let users = state.with(VolunteersState::visible);
        if users.is_empty() {
            return view! { <h1 class="notice">"No volunteers found."</h1> }.into_any();
        }
        users
            .into_iter()
            .map(|user| view! { <VolunteerCard user=user on_assign=assign/> })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="page assign-volunteers">
            <input
                class="search__input"
                type="text"
                placeholder="⌕ Search Volunteer..."
                prop:value=move || state.get().search
                on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
            />
            {body}
        </section>
    }
}

#[component]
fn VolunteerCard(user: Volunteer, on_assign: Callback<(String, String)>) -> impl IntoView {
    let assigned = assigned_event_names(&user);
    let options = assignable_events(&user)
        .into_iter()
        .map(|e| DropdownOption { value: e.event_id, label: e.label })
        .collect::<Vec<_>>();
    let assignable = !options.is_empty();
    let user_id = user.user_id.clone();
    let on_select = Callback::new(move |event_id: String| on_assign.run((event_id, user_id.clone())));

    view! {
        <article class="volunteer-card">
            <h3 class="volunteer-card__name">{user.display_name()}</h3>
            <p class="volunteer-card__email">"Email: " {user.email}</p>
            <div class="volunteer-card__assigned">
                <h4>"Assigned to:"</h4>
                {if assigned.is_empty() {
                    view! { <p class="muted">"Not Assigned to any events"</p> }.into_any()
                } else {
                    assigned.into_iter().map(|name| view! { <p>{name}</p> }).collect_view().into_any()
                }}
            </div>
            <Dropdown
                label=Signal::derive(move || {
                    if assignable { "Assign to Event" } else { "Cannot be Assigned" }.to_owned()
                })
                options=options
                on_select=on_select
                disabled=Signal::derive(move || !assignable)
            />
        </article>
    }
}
