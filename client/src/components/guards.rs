//! Route guards for sign-in state and the admin role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards wrap route views. They render nothing until the identity provider
//! has answered, then either render their children or replace the history
//! entry with a redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AdminAccess, AuthState, GuardDecision};
use crate::state::toast::ToastState;
use crate::util::auth::install_guard_redirect;

/// Children only for signed-in users; others go to `/sign-in`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, AuthState::require_auth, use_navigate());

    view! {
        <Show when=move || auth.with(|a| a.require_auth() == GuardDecision::Allow)>
            {children()}
        </Show>
    }
}

/// Children only for signed-out users; others go to `/volunteer`.
#[component]
pub fn RedirectIfSignedIn(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, AuthState::redirect_if_signed_in, use_navigate());

    view! {
        <Show when=move || auth.with(|a| a.redirect_if_signed_in() == GuardDecision::Allow)>
            {children()}
        </Show>
    }
}

/// Children only for admins. Non-admins get one error toast and are sent to
/// `/volunteer`; a denial is forgotten on unmount so the next visit re-checks.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    Effect::new(move || {
        if !auth.with(AuthState::needs_admin_check) {
            return;
        }
        let Some(user_id) = auth.with_untracked(|a| a.session.as_ref().map(|s| s.user_id.clone())) else {
            return;
        };
        auth.update(|a| a.admin = AdminAccess::Checking);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let granted = match crate::net::api::check_admin(&user_id).await {
                Ok(flag) => flag,
                Err(e) => {
                    log::warn!("admin check failed: {e}");
                    false
                }
            };
            auth.update(|a| a.admin = if granted { AdminAccess::Granted } else { AdminAccess::Denied });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    });

    let warned = StoredValue::new(false);
    Effect::new(move || {
        let denied = auth.with(|a| a.admin == AdminAccess::Denied);
        if denied && !warned.get_value() {
            warned.set_value(true);
            crate::util::toast::error(toasts, "No admin access!");
        }
    });

    install_guard_redirect(auth, AuthState::require_admin, use_navigate());
    on_cleanup(move || {
        let _ = auth.try_update(AuthState::forget_admin_denial);
    });

    let decision = move || auth.with(AuthState::require_admin);

    view! {
        <Show
            when=move || decision() == GuardDecision::Allow
            fallback=move || {
                (decision() == GuardDecision::Pending)
                    .then(|| view! { <p class="guard__checking">"Checking Admin Access..."</p> })
            }
        >
            {children()}
        </Show>
    }
}
