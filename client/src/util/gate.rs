//! Session-gated navigation decisions.
//!
//! DESIGN
//! ======
//! Routing outcomes are computed by pure functions over `SessionState` so
//! gate behavior stays unit-testable without a rendering runtime. The
//! Leptos components in `app` translate the outcome into a spinner, a
//! redirect, or the auth screen stack.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Navigational outcome for the unauthenticated entry area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Session validity is still undetermined; render only a loading
    /// indicator, no navigable content.
    Loading,
    /// A session is present; redirect to the authenticated entry point.
    RedirectAuthenticated,
    /// No session; expose the login/registration stack.
    ShowAuthScreens,
}

/// Decide what the entry gate renders, in fixed priority order:
/// loading, then authenticated redirect, then the auth screens.
///
/// Re-evaluated on every call; never cached.
#[must_use]
pub fn decide(state: &SessionState) -> NavOutcome {
    if state.loading {
        NavOutcome::Loading
    } else if state.session.is_some() {
        NavOutcome::RedirectAuthenticated
    } else {
        NavOutcome::ShowAuthScreens
    }
}

/// True when auth has resolved and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
///
/// Protected routes install this once on mount so they all apply identical
/// unauthenticated redirect behavior.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
