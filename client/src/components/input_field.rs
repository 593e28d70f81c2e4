//! Labeled text input bound to a string signal.

use leptos::prelude::*;

#[component]
pub fn InputField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let control = if multiline {
        view! {
            <textarea
                class="input-field__control"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="input-field__control"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="input-field">
            <span class="input-field__label">{label}</span>
            {control}
        </label>
    }
}
