use leptos::prelude::*;

/// Placeholder until the emergency hub exists.
#[component]
pub fn EmergencyPage() -> impl IntoView {
    view! {
        <section class="page placeholder">
            <span class="placeholder__icon" aria-hidden="true">"🚨"</span>
            <p class="placeholder__title">"Emergency Hub"</p>
            <p>"Uh-oh! This page isn't quite ready to save the day just yet."</p>
            <p class="placeholder__note">
                "Soon you'll find quick links, emergency contacts, and urgent action plans, because when chaos calls, you'll be ready to answer."
            </p>
        </section>
    }
}
