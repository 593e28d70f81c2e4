//! Email + password sign-in against the identity provider.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::components::input_field::InputField;
use crate::components::toggle_button::ToggleButton;
use crate::state::auth::AuthState;
use crate::util::storage;

/// Trim the email and require both fields.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(storage::last_email().unwrap_or_default());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_in(&email_value, &password_value).await {
                    Ok(session) => {
                        storage::remember_email(&email_value);
                        auth.update(|a| a.set_session(Some(session)));
                        navigate("/volunteer", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("sign in failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, auth, &navigate);
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Sign In"</h1>
            <form class="auth-form" on:submit=on_submit>
                <InputField label="Email" value=email input_type="email" placeholder="Enter your email" required=true/>
                <InputField
                    label="Password"
                    value=password
                    input_type="password"
                    placeholder="Enter your password"
                    required=true
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ToggleButton to_sign_up=true/>
        </div>
    }
}
