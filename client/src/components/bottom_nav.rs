//! Fixed bottom navigation for the role layouts.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::app_layout::{LayoutKind, nav_active, nav_items};

#[component]
pub fn BottomNav(kind: LayoutKind) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="bottom-nav">
            {nav_items(kind)
                .into_iter()
                .map(|item| {
                    let active = move || nav_active(item, &pathname.get());
                    view! {
                        <A href=item.href attr:class="bottom-nav__item">
                            <span class="bottom-nav__label" class:bottom-nav__label--active=active>
                                {item.label}
                            </span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
