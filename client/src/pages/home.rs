//! Landing page for signed-out visitors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let navigate_up = navigate.clone();

    view! {
        <div class="home-page">
            <div class="home-page__card">
                <h1 class="home-page__title">"Pagbantay"</h1>
                <p class="home-page__tagline">"Volunteer events, availability, and assignments."</p>
                <button
                    class="btn btn--outline"
                    on:click=move |_| navigate("/sign-in", NavigateOptions::default())
                >
                    "SIGN IN"
                </button>
                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate_up("/sign-up", NavigateOptions::default())
                >
                    "SIGN UP"
                </button>
            </div>
        </div>
    }
}
