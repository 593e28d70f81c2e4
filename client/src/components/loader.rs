use leptos::prelude::*;

/// `"Loading {text}..."` with a spinner.
#[component]
pub fn Loader(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="loader" role="status">
            <span class="loader__spinner" aria-hidden="true"></span>
            <p class="loader__text">{format!("Loading {text}...")}</p>
        </div>
    }
}
