//! Browser localStorage cache for the provider session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persisting the raw token lets a reload revalidate the previous session
//! with the provider instead of forcing a fresh sign-in. Hydrate-only; the
//! server render never touches storage.

/// localStorage key holding the current session token.
#[cfg(feature = "hydrate")]
const SESSION_TOKEN_KEY: &str = "vestibule.session_token";

/// Load the cached session token, if any.
#[must_use]
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(SESSION_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store the session token for the next page load.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(SESSION_TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the cached token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
    }
}
