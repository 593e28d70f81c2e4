//! Top bar with the page title and the admin/volunteer toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::app_layout::role_toggle;

#[component]
pub fn Header(#[prop(into)] title: Signal<&'static str>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let toggle = Memo::new(move |_| role_toggle(&location.pathname.get()));

    let on_toggle = move |_| {
        let (_, href) = toggle.get_untracked();
        navigate(href, NavigateOptions::default());
    };

    view! {
        <header class="header">
            <h1 class="header__title">{move || title.get()}</h1>
            <button class="btn header__toggle" on:click=on_toggle>
                {move || toggle.get().0}
            </button>
        </header>
    }
}
