//! Canonicalizes paths that end in `/`.

#[cfg(test)]
#[path = "redirect_trailing_slash_test.rs"]
mod redirect_trailing_slash_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

/// Replacement URL for `pathname` when it carries a trailing slash.
///
/// `/` itself is left alone. Search and hash are preserved whether or not
/// they arrive with their leading `?` / `#`.
pub fn trailing_slash_redirect(pathname: &str, search: &str, hash: &str) -> Option<String> {
    if pathname == "/" || !pathname.ends_with('/') {
        return None;
    }
    let trimmed = pathname.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };

    let mut url = path.to_owned();
    if !search.is_empty() {
        if !search.starts_with('?') {
            url.push('?');
        }
        url.push_str(search);
    }
    if !hash.is_empty() {
        if !hash.starts_with('#') {
            url.push('#');
        }
        url.push_str(hash);
    }
    Some(url)
}

/// Renders nothing; replaces the current history entry when needed.
#[component]
pub fn RedirectTrailingSlash() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = trailing_slash_redirect(&location.pathname.get(), &location.search.get(), &location.hash.get());
        if let Some(url) = target {
            navigate(&url, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
