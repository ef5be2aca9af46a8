//! Browser `localStorage` persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration, and the Google hand-off write the token here; session
//! initialization reads it back on page load. SSR paths no-op.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "cadenza_session_token";

/// Read the stored session token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for later page loads.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
