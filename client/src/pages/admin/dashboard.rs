//! Admin dashboard: volunteer and event totals plus the next upcoming event.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loader::Loader;
use crate::state::dashboard::DashboardState;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::dashboard::DashboardSummary;

        let (users, events) = futures::join!(crate::net::api::fetch_users(), crate::net::api::fetch_events(true));
        let result = users.and_then(|users| events.map(|events| (users.len(), events)));
        match result {
            Ok((count, events)) => {
                let summary = DashboardSummary::build(count, events, crate::util::dates::today());
                state.update(|s| s.summary = summary);
            }
            Err(e) => {
                log::error!("dashboard fetch failed: {e}");
                state.update(|s| s.error = Some(e.detail_or("Failed to fetch data")));
            }
        }
        state.update(|s| s.loading = false);
    });

    let body = move || {
        let current = state.get();
        if current.loading {
            return view! { <Loader text="Dashboard"/> }.into_any();
        }
        if let Some(error) = current.error {
            return view! { <div class="notice notice--error"><p>{error}</p></div> }.into_any();
        }
        let summary = current.summary;
        let days = summary.days_label();
        let upcoming = match summary.upcoming {
            Some(event) => view! {
                <article class="event-card event-card--highlight">
                    <h3 class="event-card__name">{event.event_name}</h3>
                    <p class="event-card__location">{event.location}</p>
                    <p class="event-card__date">{event.date}</p>
                    <p class="event-card__description">{event.description}</p>
                    <div class="event-card__footer">
                        <span>{days}</span>
                        <A href="/admin/events" attr:class="btn btn--icon">"›"</A>
                    </div>
                </article>
            }
            .into_any(),
            None => view! {
                <div class="event-card event-card--empty">
                    <h2>"No upcoming events"</h2>
                </div>
            }
            .into_any(),
        };

        view! {
            <A href="/admin/assign-volunteers" attr:class="stat-card">
                <h2>{format!("{} Volunteers", summary.total_volunteers)}</h2>
                <p>"Active Volunteers in the System"</p>
            </A>
            <A href="/admin/events" attr:class="stat-card">
                <h2>{format!("{} Events", summary.total_events)}</h2>
                <p>"Scheduled Events in the System"</p>
            </A>
            <h3 class="section-title">"Upcoming Event"</h3>
            {upcoming}
        }
        .into_any()
    };

    view! { <section class="page admin-dashboard">{body}</section> }
}
