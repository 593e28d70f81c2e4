//! Volunteer profile with assigned events and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::profile::{ProfileState, assignment_line, available_assignments};
use crate::util::auth::sign_out;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(ProfileState::default());
    let navigate = leptos_router::hooks::use_navigate();

    let email = auth.with_untracked(AuthState::email);
    #[cfg(feature = "hydrate")]
    {
        if let Some(email) = email {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_user_by_email(&email).await {
                    Ok(user) => state.update(|s| s.user = Some(user)),
                    Err(e) => {
                        log::error!("profile fetch failed: {e}");
                        state.update(|s| s.error = Some("Failed to load profile.".to_owned()));
                    }
                }
                state.update(|s| s.loading = false);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = email;

    let on_sign_out = move |_| sign_out(auth, navigate.clone());

    let body = move || {
        let Some(session) = auth.get().session else {
            return view! { <div>"Loading user..."</div> }.into_any();
        };
        let current = state.get();
        if current.loading {
            return view! { <div>"Loading profile..."</div> }.into_any();
        }
        if let Some(error) = current.error {
            return view! { <div class="notice notice--error">{error}</div> }.into_any();
        }
        let lines = current.user.as_ref().map(available_assignments).unwrap_or_default();
        let name = session
            .full_name
            .clone()
            .or_else(|| current.user.as_ref().map(crate::net::types::Volunteer::display_name))
            .unwrap_or_default();
        let assigned = if lines.is_empty() {
            view! { <p>"No assigned events yet."</p> }.into_any()
        } else {
            view! { <ul>{lines.iter().map(|e| view! { <li>{assignment_line(e)}</li> }).collect_view()}</ul> }
                .into_any()
        };
        view! {
            <div class="profile">
                <img class="profile__avatar" src=session.image_url.unwrap_or_default() alt="Profile"/>
                <h2 class="profile__name">{name}</h2>
                <p class="profile__email">{session.email.unwrap_or_default()}</p>
                <div class="profile__assignments">
                    <h3>"Assigned Events"</h3>
                    {assigned}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section class="page volunteer-profile">
            {body}
            <button class="btn btn--primary" on:click=on_sign_out>"Sign Out"</button>
        </section>
    }
}
