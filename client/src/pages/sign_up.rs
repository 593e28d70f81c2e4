//! Email + password sign-up with an emailed verification code.
//!
//! The flow has two forms: credentials first, then the code. Once the
//! provider verifies the code the created session becomes active.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;

use crate::components::input_field::InputField;
use crate::components::toggle_button::ToggleButton;
use crate::net::identity::PendingSignUp;
use crate::pages::sign_in::validate_credentials;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpStep {
    Credentials,
    Verify(PendingSignUp),
    Done,
}

/// Verification codes are digits; spaces from copy-paste are dropped.
pub fn normalize_code(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let step = RwSignal::new(SignUpStep::Credentials);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_credentials = move |ev: leptos::ev::SubmitEvent| {
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
        leptos::task::spawn_local(async move {
            match crate::net::identity::start_sign_up(&email_value, &password_value).await {
                Ok(pending) => step.set(SignUpStep::Verify(pending)),
                Err(e) => {
                    log::warn!("sign up failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let SignUpStep::Verify(pending) = step.get() else {
            return;
        };
        let code_value = normalize_code(&code.get());
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::identity::complete_sign_up(&pending, &code_value).await {
                Ok(session) => {
                    auth.update(|a| a.set_session(Some(session)));
                    step.set(SignUpStep::Done);
                    crate::util::toast::success(toasts, "Signed up and session is active!");
                }
                Err(e) => {
                    log::warn!("verification failed: {e}");
                    error.set(Some("Email verification failed".to_owned()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (pending, code_value, toasts);
    };

    Effect::new(move || {
        if step.get() == SignUpStep::Done {
            navigate("/volunteer", leptos_router::NavigateOptions::default());
        }
    });

    let credentials_form = move || {
        view! {
            <form class="auth-form" on:submit=on_credentials>
                <InputField label="Email" value=email input_type="email" placeholder="Enter your email" required=true/>
                <InputField
                    label="Password"
                    value=password
                    input_type="password"
                    placeholder="Enter your password"
                    required=true
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
            </form>
        }
    };

    let verify_form = move || {
        view! {
            <form class="auth-form" on:submit=on_verify>
                <p class="auth-form__hint">"Enter the verification code sent to your email:"</p>
                <InputField label="Verification code" value=code placeholder="123456" required=true/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Verify"
                </button>
            </form>
        }
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Sign Up"</h1>
            <Show when=move || !auth.get().loading fallback=|| view! { <div>"Loading..."</div> }>
                {move || match step.get() {
                    SignUpStep::Credentials => credentials_form().into_any(),
                    SignUpStep::Verify(_) => verify_form().into_any(),
                    SignUpStep::Done => view! { <div>"Signed up and session is active!"</div> }.into_any(),
                }}
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ToggleButton/>
        </div>
    }
}
