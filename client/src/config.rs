//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so endpoint base URLs are
//! baked in at compile time from `PAGBANTAY_API_URL` and
//! `PAGBANTAY_IDENTITY_URL`. Set both when building the bundle: the host
//! does not proxy `/api` or `/identity`, so the relative defaults only work
//! behind a reverse proxy that does. `hydrate()` logs a warning for each
//! default still in use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::LazyLock;

const DEFAULT_API_URL: &str = "/api";
const DEFAULT_IDENTITY_URL: &str = "/identity";

/// Base URLs for the REST backend and the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub identity_url: String,
}

impl ClientConfig {
    /// Build a config from optional raw values, falling back to defaults.
    pub fn from_values(api_url: Option<&str>, identity_url: Option<&str>) -> Self {
        Self {
            api_url: normalize_base_url(api_url, DEFAULT_API_URL),
            identity_url: normalize_base_url(identity_url, DEFAULT_IDENTITY_URL),
        }
    }
}

/// Names of the build-time variables that were not set.
pub fn unset_overrides(api_url: Option<&str>, identity_url: Option<&str>) -> Vec<&'static str> {
    let blank = |raw: Option<&str>| raw.is_none_or(|v| v.trim().is_empty());
    let mut unset = Vec::new();
    if blank(api_url) {
        unset.push("PAGBANTAY_API_URL");
    }
    if blank(identity_url) {
        unset.push("PAGBANTAY_IDENTITY_URL");
    }
    unset
}

fn normalize_base_url(raw: Option<&str>, fallback: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback);
    let trimmed = value.trim_end_matches('/');
    if trimmed.is_empty() { fallback.to_owned() } else { trimmed.to_owned() }
}

static CONFIG: LazyLock<ClientConfig> = LazyLock::new(|| {
    ClientConfig::from_values(option_env!("PAGBANTAY_API_URL"), option_env!("PAGBANTAY_IDENTITY_URL"))
});

/// Process-wide client configuration.
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

/// Warn about each endpoint that fell back to its relative default.
pub fn warn_on_defaults() {
    for name in unset_overrides(option_env!("PAGBANTAY_API_URL"), option_env!("PAGBANTAY_IDENTITY_URL")) {
        log::warn!("{name} was not set at build time; using the relative default");
    }
}
