use super::*;

fn session() -> Session {
    Session {
        session_id: "sess_1".to_owned(),
        user_id: "user_1".to_owned(),
        email: Some("ana@example.com".to_owned()),
        full_name: Some("Ana Cruz".to_owned()),
        image_url: None,
    }
}

fn loaded(session: Option<Session>) -> AuthState {
    let mut state = AuthState::default();
    state.set_session(session);
    state
}

#[test]
fn default_state_is_loading_and_pending() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.require_auth(), GuardDecision::Pending);
    assert_eq!(state.redirect_if_signed_in(), GuardDecision::Pending);
    assert_eq!(state.require_admin(), GuardDecision::Pending);
    assert!(!state.needs_admin_check());
}

#[test]
fn require_auth_redirects_signed_out_users_to_sign_in() {
    assert_eq!(loaded(None).require_auth(), GuardDecision::Redirect("/sign-in"));
    assert_eq!(loaded(Some(session())).require_auth(), GuardDecision::Allow);
}

#[test]
fn redirect_if_signed_in_sends_users_to_volunteer_home() {
    assert_eq!(loaded(Some(session())).redirect_if_signed_in(), GuardDecision::Redirect("/volunteer"));
    assert_eq!(loaded(None).redirect_if_signed_in(), GuardDecision::Allow);
}

#[test]
fn require_admin_waits_for_check() {
    let mut state = loaded(Some(session()));
    assert!(state.needs_admin_check());
    assert_eq!(state.require_admin(), GuardDecision::Pending);

    state.admin = AdminAccess::Checking;
    assert!(!state.needs_admin_check());
    assert_eq!(state.require_admin(), GuardDecision::Pending);
}

#[test]
fn require_admin_follows_check_result() {
    let mut state = loaded(Some(session()));
    state.admin = AdminAccess::Granted;
    assert_eq!(state.require_admin(), GuardDecision::Allow);
    state.admin = AdminAccess::Denied;
    assert_eq!(state.require_admin(), GuardDecision::Redirect("/volunteer"));
}

#[test]
fn require_admin_denies_signed_out_users() {
    assert_eq!(loaded(None).require_admin(), GuardDecision::Redirect("/volunteer"));
}

#[test]
fn set_session_resets_admin_result() {
    let mut state = loaded(Some(session()));
    state.admin = AdminAccess::Granted;
    state.set_session(None);
    assert_eq!(state.admin, AdminAccess::Unknown);
    assert!(!state.signed_in());
    assert_eq!(state.email(), None);
}

#[test]
fn forget_admin_denial_allows_a_fresh_check() {
    let mut state = loaded(Some(session()));
    state.admin = AdminAccess::Denied;
    state.forget_admin_denial();
    assert_eq!(state.admin, AdminAccess::Unknown);
    assert!(state.needs_admin_check());
}

#[test]
fn forget_admin_denial_keeps_a_grant() {
    let mut state = loaded(Some(session()));
    state.admin = AdminAccess::Granted;
    state.forget_admin_denial();
    assert_eq!(state.admin, AdminAccess::Granted);
}
