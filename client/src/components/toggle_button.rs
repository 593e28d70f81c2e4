//! Switch between the sign-in and sign-up forms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Rendered on the sign-in page with `to_sign_up`, and on sign-up without it.
#[component]
pub fn ToggleButton(#[prop(optional)] to_sign_up: bool) -> impl IntoView {
    let navigate = use_navigate();
    let (label, href) = if to_sign_up { ("SIGN UP", "/sign-up") } else { ("SIGN IN", "/sign-in") };

    view! {
        <button
            type="button"
            class="btn btn--ghost toggle-button"
            on:click=move |_| navigate(href, NavigateOptions::default())
        >
            {label}
        </button>
    }
}
