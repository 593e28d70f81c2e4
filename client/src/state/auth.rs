//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware pages to coordinate sign-in redirects,
//! the admin role check, and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::identity::Session;

/// Outcome of the backend admin check for the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminAccess {
    #[default]
    Unknown,
    Checking,
    Granted,
    Denied,
}

/// What a route guard should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Not enough information yet; render nothing.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the identity provider has answered once.
    pub loading: bool,
    pub admin: AdminAccess,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true, admin: AdminAccess::Unknown }
    }
}

impl AuthState {
    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Primary email of the signed-in user.
    pub fn email(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.email.clone())
    }

    /// Replace the session and forget any admin result tied to the old one.
    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
        self.admin = AdminAccess::Unknown;
    }

    /// Guard for pages that need a signed-in user.
    pub fn require_auth(&self) -> GuardDecision {
        if self.loading {
            GuardDecision::Pending
        } else if self.signed_in() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect("/sign-in")
        }
    }

    /// Guard for the landing and sign-in/up pages.
    pub fn redirect_if_signed_in(&self) -> GuardDecision {
        if self.loading {
            GuardDecision::Pending
        } else if self.signed_in() {
            GuardDecision::Redirect("/volunteer")
        } else {
            GuardDecision::Allow
        }
    }

    /// Guard for the admin area.
    pub fn require_admin(&self) -> GuardDecision {
        if self.loading {
            return GuardDecision::Pending;
        }
        if !self.signed_in() {
            return GuardDecision::Redirect("/volunteer");
        }
        match self.admin {
            AdminAccess::Unknown | AdminAccess::Checking => GuardDecision::Pending,
            AdminAccess::Granted => GuardDecision::Allow,
            AdminAccess::Denied => GuardDecision::Redirect("/volunteer"),
        }
    }

    /// Drop a denial so the next visit to the admin area checks again.
    pub fn forget_admin_denial(&mut self) {
        if self.admin == AdminAccess::Denied {
            self.admin = AdminAccess::Unknown;
        }
    }

    /// True when a signed-in session has not been checked for admin yet.
    pub fn needs_admin_check(&self) -> bool {
        !self.loading && self.signed_in() && self.admin == AdminAccess::Unknown
    }
}
