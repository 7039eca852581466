//! Auth-session state for the current user.
//!
//! DESIGN
//! ======
//! `SessionStore` is the single writer for session state: an explicitly
//! owned container with a synchronous subscribe/notify contract rather than
//! a hidden global. Every mutation updates the full tuple before any
//! subscriber runs, so readers never observe `user` and `session` out of
//! step. The app shell mirrors notifications into an `RwSignal` for
//! rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Session, User};

/// Snapshot of the current authentication state.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Credential bundle issued by the identity provider, if signed in.
    pub session: Option<Session>,
    /// Identity embedded in `session`; present exactly when `session` is.
    pub user: Option<User>,
    /// True until the first provider session report arrives.
    pub loading: bool,
}

impl Default for SessionState {
    /// Process-start state: unresolved, signed out.
    fn default() -> Self {
        Self { session: None, user: None, loading: true }
    }
}

/// State-transition messages delivered by the identity-provider bridge.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The provider reported the current session (present or absent).
    ///
    /// The first such event ends the initial loading phase; later events
    /// are plain session replacements (sign-in, sign-out, refresh).
    Resolved(Option<Session>),
}

/// Subscription handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&SessionState)>;

/// Single source of truth for "am I authenticated, as whom, and have we
/// finished checking".
///
/// All mutation goes through [`set_session`](Self::set_session),
/// [`set_loading`](Self::set_loading), or [`apply`](Self::apply); each
/// mutation notifies every subscriber synchronously before returning.
/// Single-threaded by construction — the store lives on the UI event loop
/// and needs no locking.
pub struct SessionStore {
    state: SessionState,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: SessionState::default(), subscribers: Vec::new(), next_id: 0 }
    }

    /// Current state tuple.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SessionState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a previously registered subscriber. Unknown IDs are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Replace the session, deriving `user` from the embedded identity.
    ///
    /// Pure state replacement — session validity is the provider's concern.
    pub fn set_session(&mut self, session: Option<Session>) {
        self.state.user = session.as_ref().map(|s| s.user.clone());
        self.state.session = session;
        self.notify();
    }

    /// Set the loading flag. Setting the current value is a no-op and does
    /// not re-notify.
    pub fn set_loading(&mut self, loading: bool) {
        if self.state.loading == loading {
            return;
        }
        self.state.loading = loading;
        self.notify();
    }

    /// Process a provider event.
    ///
    /// The session replacement and the loading transition land in one
    /// update; subscribers never observe them separately.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Resolved(session) => {
                self.state.loading = false;
                self.state.user = session.as_ref().map(|s| s.user.clone());
                self.state.session = session;
                self.notify();
            }
        }
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(state);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
