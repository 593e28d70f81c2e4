//! Volunteer home: the volunteer roster.

use leptos::prelude::*;

use crate::net::types::Volunteer;

#[component]
pub fn VolunteerDashboardPage() -> impl IntoView {
    let volunteers = RwSignal::new(Vec::<Volunteer>::new());
    let error = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users().await {
            Ok(users) => volunteers.set(users),
            Err(e) => {
                log::error!("volunteer fetch failed: {e}");
                error.set(Some("Failed to fetch volunteers."));
            }
        }
    });

    view! {
        <section class="page volunteer-dashboard">
            <Show when=move || error.get().is_some()>
                <p class="notice notice--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="roster">
                {move || {
                    let list = volunteers.get();
                    if list.is_empty() {
                        return view! { <p>"No volunteers found."</p> }.into_any();
                    }
                    list.into_iter()
                        .map(|v| {
                            let phone = v.contact_number.clone().filter(|p| !p.is_empty());
                            view! {
                                <li class="roster__item">
                                    <p><strong>"Name: "</strong>{v.display_name()}</p>
                                    <p><strong>"Email: "</strong>{v.email}</p>
                                    {phone.map(|p| view! { <p><strong>"Phone: "</strong>{p}</p> })}
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </section>
    }
}
