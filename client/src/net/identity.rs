//! Identity-provider helpers: session lookup, sign-in, sign-up, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity is delegated to a hosted provider. The browser talks to the
//! provider's frontend API under `PAGBANTAY_IDENTITY_URL` with credentials
//! included, so the provider's own cookies carry the session. This module
//! only translates the provider's resources into a [`Session`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as the app sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    /// Provider user id; the backend keys admin checks on it.
    pub user_id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub image_url: Option<String>,
}

/// Failure of an identity-provider call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("network error: {0}")]
    Network(String),
    /// The provider refused the request; carries its first error message.
    #[error("{0}")]
    Rejected(String),
    /// The flow did not reach `complete` (e.g. extra factors required).
    #[error("sign-in incomplete: {0}")]
    Incomplete(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Envelope<T> {
    pub response: Option<T>,
    #[serde(default)]
    pub client: Option<ClientResource>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ClientResource {
    #[serde(default)]
    pub sessions: Vec<SessionResource>,
    #[serde(default)]
    pub last_active_session_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SessionResource {
    pub id: String,
    #[serde(default)]
    pub status: String,
    pub user: UserResource,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct UserResource {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddressResource>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct EmailAddressResource {
    pub id: String,
    pub email_address: String,
}

/// Sign-in or sign-up attempt state.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct AttemptResource {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub created_session_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Clone, Debug, Deserialize)]
struct ErrorItem {
    message: String,
    #[serde(default)]
    long_message: Option<String>,
}

/// An in-progress sign-up waiting for its email code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSignUp {
    pub sign_up_id: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn client_endpoint(base: &str) -> String {
    format!("{base}/v1/client")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_ins_endpoint(base: &str) -> String {
    format!("{base}/v1/client/sign_ins")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_ups_endpoint(base: &str) -> String {
    format!("{base}/v1/client/sign_ups")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_action_endpoint(base: &str, sign_up_id: &str, action: &str) -> String {
    format!("{base}/v1/client/sign_ups/{sign_up_id}/{action}")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_action_endpoint(base: &str, session_id: &str, action: &str) -> String {
    format!("{base}/v1/client/sessions/{session_id}/{action}")
}

impl SessionResource {
    fn to_session(&self) -> Session {
        let user = &self.user;
        let email = user
            .primary_email_address_id
            .as_deref()
            .and_then(|primary| user.email_addresses.iter().find(|e| e.id == primary))
            .or_else(|| user.email_addresses.first())
            .map(|e| e.email_address.clone());
        let full_name = [user.first_name.as_deref(), user.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Session {
            session_id: self.id.clone(),
            user_id: user.id.clone(),
            email,
            full_name: (!full_name.is_empty()).then_some(full_name),
            image_url: user.image_url.clone(),
        }
    }
}

/// Pick the session to treat as current: the last active one when it is
/// still active, otherwise the first active session.
pub(crate) fn active_session(client: &ClientResource) -> Option<Session> {
    let is_active = |s: &&SessionResource| s.status.is_empty() || s.status == "active";
    client
        .last_active_session_id
        .as_deref()
        .and_then(|id| client.sessions.iter().filter(is_active).find(|s| s.id == id))
        .or_else(|| client.sessions.iter().find(is_active))
        .map(SessionResource::to_session)
}

/// Session id from a finished sign-in/sign-up attempt.
pub(crate) fn completed_session_id(attempt: &AttemptResource) -> Result<String, IdentityError> {
    if attempt.status != "complete" {
        return Err(IdentityError::Incomplete(attempt.status.clone()));
    }
    attempt
        .created_session_id
        .clone()
        .ok_or_else(|| IdentityError::Decode("missing created_session_id".to_owned()))
}

/// First provider error message in an error body, or a status fallback.
pub(crate) fn rejection_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.errors.into_iter().next())
        .map(|e| e.long_message.unwrap_or(e.message))
        .unwrap_or_else(|| format!("identity request failed: {status}"))
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::{Envelope, IdentityError, rejection_message};

    async fn check(resp: Response) -> Result<Response, IdentityError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(IdentityError::Rejected(rejection_message(&body, status)))
    }

    pub async fn call<T: DeserializeOwned>(
        builder: RequestBuilder,
        body: Option<serde_json::Value>,
    ) -> Result<Envelope<T>, IdentityError> {
        let builder = builder.credentials(RequestCredentials::Include);
        let resp = match body {
            Some(body) => builder
                .json(&body)
                .map_err(|e| IdentityError::Decode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| IdentityError::Network(e.to_string()))?;
        let resp = check(resp).await?;
        resp.json::<Envelope<T>>()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))
    }
}

/// Load the current session, if the provider has one for this browser.
///
/// # Errors
///
/// Returns an `IdentityError` if the provider cannot be reached.
pub async fn load_session() -> Result<Option<Session>, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = client_endpoint(&crate::config::config().identity_url);
        let env: Envelope<ClientResource> = http::call(gloo_net::http::Request::get(&url), None).await?;
        Ok(env.response.as_ref().and_then(active_session))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IdentityError::Unavailable)
    }
}

/// Make `session_id` the active session and return it.
async fn activate_session(session_id: &str) -> Result<Session, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session_action_endpoint(&crate::config::config().identity_url, session_id, "touch");
        let env: Envelope<SessionResource> = http::call(gloo_net::http::Request::post(&url), None).await?;
        env.response
            .map(|s| s.to_session())
            .ok_or_else(|| IdentityError::Decode("missing session".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(IdentityError::Unavailable)
    }
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns an `IdentityError` if the provider rejects the credentials or the
/// flow needs steps this app does not support.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = sign_ins_endpoint(&crate::config::config().identity_url);
        let body = serde_json::json!({ "identifier": email, "password": password, "strategy": "password" });
        let env: Envelope<AttemptResource> = http::call(gloo_net::http::Request::post(&url), Some(body)).await?;
        let attempt = env
            .response
            .ok_or_else(|| IdentityError::Decode("missing sign-in".to_owned()))?;
        let session_id = completed_session_id(&attempt)?;
        activate_session(&session_id).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(IdentityError::Unavailable)
    }
}

/// Create a sign-up and send the email verification code.
///
/// # Errors
///
/// Returns an `IdentityError` if the provider rejects the sign-up.
pub async fn start_sign_up(email: &str, password: &str) -> Result<PendingSignUp, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let base = &crate::config::config().identity_url;
        let body = serde_json::json!({ "email_address": email, "password": password });
        let env: Envelope<AttemptResource> =
            http::call(gloo_net::http::Request::post(&sign_ups_endpoint(base)), Some(body)).await?;
        let attempt = env
            .response
            .ok_or_else(|| IdentityError::Decode("missing sign-up".to_owned()))?;

        let prepare = sign_up_action_endpoint(base, &attempt.id, "prepare_verification");
        let _: Envelope<AttemptResource> = http::call(
            gloo_net::http::Request::post(&prepare),
            Some(serde_json::json!({ "strategy": "email_code" })),
        )
        .await?;
        Ok(PendingSignUp { sign_up_id: attempt.id })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(IdentityError::Unavailable)
    }
}

/// Submit the emailed code and activate the resulting session.
///
/// # Errors
///
/// Returns an `IdentityError` if the code is rejected or no session results.
pub async fn complete_sign_up(pending: &PendingSignUp, code: &str) -> Result<Session, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = sign_up_action_endpoint(
            &crate::config::config().identity_url,
            &pending.sign_up_id,
            "attempt_verification",
        );
        let body = serde_json::json!({ "strategy": "email_code", "code": code });
        let env: Envelope<AttemptResource> = http::call(gloo_net::http::Request::post(&url), Some(body)).await?;
        let attempt = env
            .response
            .ok_or_else(|| IdentityError::Decode("missing sign-up".to_owned()))?;
        let session_id = completed_session_id(&attempt)?;
        activate_session(&session_id).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pending, code);
        Err(IdentityError::Unavailable)
    }
}

/// End the given session at the provider.
///
/// # Errors
///
/// Returns an `IdentityError` if the provider call fails.
pub async fn sign_out(session_id: &str) -> Result<(), IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session_action_endpoint(&crate::config::config().identity_url, session_id, "end");
        let _: Envelope<serde_json::Value> = http::call(gloo_net::http::Request::post(&url), None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(IdentityError::Unavailable)
    }
}
