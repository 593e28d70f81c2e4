//! Error type shared by the REST helpers.
//!
//! ERROR HANDLING
//! ==============
//! Pages never branch on the variant beyond picking a message: either the
//! backend's `detail` field or a fixed per-screen fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The backend's `detail` message if it sent one, else `fallback`.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// Accepts `{"detail": "..."}` as well as FastAPI-style validation lists
/// (`{"detail": [{"msg": "..."}]}`), joining the messages.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect::<Vec<_>>();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
