//! Button that opens a menu of choices.
//!
//! Used for the availability status picker and the assign-to-event menu.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

#[component]
pub fn Dropdown(
    #[prop(into)] label: Signal<String>,
    options: Vec<DropdownOption>,
    on_select: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="dropdown">
            <button
                type="button"
                class="btn dropdown__toggle"
                disabled=move || disabled.get()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || label.get()}
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown__menu" role="menu">
                    {options
                        .iter()
                        .cloned()
                        .map(|DropdownOption { value, label: text }| {
                            view! {
                                <li
                                    class="dropdown__item"
                                    role="menuitem"
                                    on:click=move |_| {
                                        open.set(false);
                                        on_select.run(value.clone());
                                    }
                                >
                                    {text}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
