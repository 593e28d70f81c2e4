//! Remembers the last sign-in email in `localStorage`.
//!
//! Only plain text is stored. SSR builds read nothing and write nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key under which the last successfully signed-in email is kept.
pub const LAST_EMAIL_KEY: &str = "pagbantay_last_email";

/// Normalize an email before storing it or after reading it back.
fn clean_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    (!email.is_empty() && email.contains('@')).then(|| email.to_owned())
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Email from the last successful sign-in, if one was stored.
pub fn last_email() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(LAST_EMAIL_KEY).ok().flatten()?;
        clean_email(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn remember_email(email: &str) {
    let Some(email) = clean_email(email) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(LAST_EMAIL_KEY, &email) {
            log::warn!("could not remember sign-in email: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
    }
}
