use leptos::prelude::*;

/// Placeholder until the first aid guide is written.
#[component]
pub fn FirstAidGuidePage() -> impl IntoView {
    view! {
        <section class="page placeholder">
            <span class="placeholder__icon" aria-hidden="true">"⛑"</span>
            <p class="placeholder__title">"First Aid Guide"</p>
            <p>"This page is still under construction..."</p>
            <p class="placeholder__note">
                "Soon you'll find quick tips, emergency steps, and essential info to help you respond confidently in any situation."
            </p>
        </section>
    }
}
