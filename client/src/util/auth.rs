//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards apply identical redirect behavior, and sign-out is reachable
//! from more than one page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, GuardDecision};

/// Path to navigate to for `decision`, if any.
pub fn redirect_target(decision: GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Redirect(path) => Some(path),
        GuardDecision::Pending | GuardDecision::Allow => None,
    }
}

/// Navigate (replacing history) whenever `decide` asks for a redirect.
pub fn install_guard_redirect<D, F>(auth: RwSignal<AuthState>, decide: D, navigate: F)
where
    D: Fn(&AuthState) -> GuardDecision + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let decision = auth.with(|state| decide(state));
        if let Some(path) = redirect_target(decision) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// End the provider session, clear local auth state, and go to `/`.
pub fn sign_out<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let session_id = auth.with_untracked(|a| a.session.as_ref().map(|s| s.session_id.clone()));
        leptos::task::spawn_local(async move {
            if let Some(session_id) = session_id {
                if let Err(e) = crate::net::identity::sign_out(&session_id).await {
                    log::warn!("sign out failed: {e}");
                }
            }
            auth.update(|a| a.set_session(None));
            navigate("/", NavigateOptions::default());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, navigate);
    }
}
