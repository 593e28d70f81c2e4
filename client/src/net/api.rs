//! REST API helpers for the volunteer-event backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics; pages turn the error
//! into an inline message or a toast and stay on the current screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AdminRecord, Availability, AvailabilityPayload, Event, EventUpdate, NewAssignment, NewEvent, Volunteer,
};

/// Millisecond timestamp used as the `_t` query value.
#[cfg(any(test, feature = "hydrate"))]
fn cache_buster(now: chrono::DateTime<chrono::Utc>) -> String {
    now.timestamp_millis().to_string()
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint(base: &str) -> String {
    format!("{base}/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_by_email_endpoint(base: &str, email: &str) -> String {
    format!("{base}/users/email/{}", urlencoding::encode(email.trim()))
}

#[cfg(any(test, feature = "hydrate"))]
fn admins_endpoint(base: &str) -> String {
    format!("{base}/admin")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_check_endpoint(base: &str, user_id: &str) -> String {
    format!("{base}/admin/{}", urlencoding::encode(user_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn events_endpoint(base: &str) -> String {
    format!("{base}/events")
}

#[cfg(any(test, feature = "hydrate"))]
fn event_endpoint(base: &str, event_id: &str) -> String {
    format!("{base}/events/{}", urlencoding::encode(event_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn assignments_endpoint(base: &str) -> String {
    format!("{base}/assignments")
}

#[cfg(any(test, feature = "hydrate"))]
fn availability_endpoint(base: &str) -> String {
    format!("{base}/availability")
}

/// The create route keeps the trailing slash the backend registers.
#[cfg(any(test, feature = "hydrate"))]
fn availability_create_endpoint(base: &str) -> String {
    format!("{base}/availability/")
}

#[cfg(any(test, feature = "hydrate"))]
fn availability_update_endpoint(base: &str, user_id: &str, event_id: &str) -> String {
    format!(
        "{base}/availability/{}/{}",
        urlencoding::encode(user_id),
        urlencoding::encode(event_id)
    )
}

/// Require a JSON array body, as the events screens do.
#[cfg(any(test, feature = "hydrate"))]
fn events_from_value(value: serde_json::Value) -> Result<Vec<Event>, ApiError> {
    if !value.is_array() {
        return Err(ApiError::Decode("Expected array response from /events API".to_owned()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Parse `GET /admin/{id}`, which answers with a bare JSON boolean.
#[cfg(any(test, feature = "hydrate"))]
fn admin_flag_from_value(value: &serde_json::Value) -> Result<bool, ApiError> {
    match value {
        serde_json::Value::Bool(flag) => Ok(*flag),
        serde_json::Value::Object(map) => map
            .get("is_admin")
            .and_then(serde_json::Value::as_bool)
            .ok_or_else(|| ApiError::Decode("expected admin flag".to_owned())),
        _ => Err(ApiError::Decode("expected admin flag".to_owned())),
    }
}

#[cfg(feature = "hydrate")]
mod http {
    //! Thin `gloo-net` wrappers that map transport and status failures into `ApiError`.

    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::net::error::{ApiError, extract_detail};

    async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let detail = resp.text().await.ok().and_then(|body| extract_detail(&body));
        log::warn!("request to {} failed with {status}", resp.url());
        Err(ApiError::Status { status, detail })
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    async fn send_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request: Request = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    pub async fn get_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = send(builder).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
        send_body(Request::post(url), body).await.map(|_| ())
    }

    pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
        send_body(Request::put(url), body).await.map(|_| ())
    }
}

/// Fetch every user from `/users`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a user list.
pub async fn fetch_users() -> Result<Vec<Volunteer>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = users_endpoint(&crate::config::config().api_url);
        http::get_json(gloo_net::http::Request::get(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Resolve a backend user (with assignments and availability) by email.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or no user matches.
pub async fn fetch_user_by_email(email: &str) -> Result<Volunteer, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_by_email_endpoint(&crate::config::config().api_url, email);
        http::get_json(gloo_net::http::Request::get(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the admin roster from `/admin`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn fetch_admins() -> Result<Vec<AdminRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = admins_endpoint(&crate::config::config().api_url);
        http::get_json(gloo_net::http::Request::get(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend whether the identity-provider user is an admin.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not a flag.
pub async fn check_admin(user_id: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = admin_check_endpoint(&crate::config::config().api_url, user_id);
        let value: serde_json::Value = http::get_json(gloo_net::http::Request::get(&url)).await?;
        admin_flag_from_value(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch all events. `bust_cache` adds a `_t` timestamp and no-cache headers.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is not an array.
pub async fn fetch_events(bust_cache: bool) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = events_endpoint(&crate::config::config().api_url);
        let mut builder = gloo_net::http::Request::get(&url);
        if bust_cache {
            let ts = cache_buster(chrono::Utc::now());
            builder = builder
                .header("Cache-Control", "no-cache")
                .header("Pragma", "no-cache")
                .query([("_t", ts)]);
        }
        let value: serde_json::Value = http::get_json(builder).await?;
        events_from_value(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bust_cache;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one event by id.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the event does not exist.
pub async fn fetch_event(event_id: &str) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = event_endpoint(&crate::config::config().api_url, event_id);
        http::get_json(gloo_net::http::Request::get(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err(ApiError::Unavailable)
    }
}

/// Create an event via `POST /events`.
///
/// # Errors
///
/// Returns an `ApiError` if the backend rejects the event.
pub async fn create_event(event: &NewEvent) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = events_endpoint(&crate::config::config().api_url);
        http::post_json(&url, event).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event;
        Err(ApiError::Unavailable)
    }
}

/// Update an event via `PUT /events/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the backend rejects the update.
pub async fn update_event(event_id: &str, update: &EventUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = event_endpoint(&crate::config::config().api_url, event_id);
        http::put_json(&url, update).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (event_id, update);
        Err(ApiError::Unavailable)
    }
}

/// Assign a volunteer to an event via `POST /assignments`.
///
/// # Errors
///
/// Returns an `ApiError` if the backend rejects the assignment.
pub async fn create_assignment(assignment: &NewAssignment) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = assignments_endpoint(&crate::config::config().api_url);
        http::post_json(&url, assignment).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
        Err(ApiError::Unavailable)
    }
}

/// Fetch availability records from `/availability`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn fetch_availability() -> Result<Vec<Availability>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = availability_endpoint(&crate::config::config().api_url);
        http::get_json(gloo_net::http::Request::get(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Record a first availability answer via `POST /availability/`.
///
/// # Errors
///
/// Returns an `ApiError` if the backend rejects the record.
pub async fn create_availability(payload: &AvailabilityPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = availability_create_endpoint(&crate::config::config().api_url);
        http::post_json(&url, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Change an existing availability answer via `PUT /availability/{user}/{event}`.
///
/// # Errors
///
/// Returns an `ApiError` if the backend rejects the update.
pub async fn update_availability(payload: &AvailabilityPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = availability_update_endpoint(
            &crate::config::config().api_url,
            &payload.user_id,
            &payload.event_id,
        );
        http::put_json(&url, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}
