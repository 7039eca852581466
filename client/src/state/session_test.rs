use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::net::types::{Session, User};

fn make_user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: id.to_owned(),
        avatar_url: None,
    }
}

fn make_session(id: &str) -> Session {
    Session { token: format!("tok-{id}"), user: make_user(id) }
}

/// Record every state a subscriber observes.
fn record_states(store: &mut SessionStore) -> Rc<RefCell<Vec<SessionState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    seen
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_state_is_loading_and_signed_out() {
    let store = SessionStore::new();
    let state = store.state();
    assert!(state.loading);
    assert!(state.session.is_none());
    assert!(state.user.is_none());
}

// =============================================================
// set_session
// =============================================================

#[test]
fn set_session_derives_user_from_embedded_identity() {
    let mut store = SessionStore::new();
    store.set_session(Some(make_session("u1")));
    let state = store.state();
    assert_eq!(state.session.as_ref().map(|s| s.token.as_str()), Some("tok-u1"));
    assert_eq!(state.user, Some(make_user("u1")));
}

#[test]
fn set_session_none_clears_user_in_the_same_update() {
    let mut store = SessionStore::new();
    store.set_session(Some(make_session("u1")));
    let seen = record_states(&mut store);

    store.set_session(None);

    // Exactly one notification, and the observed tuple is already consistent.
    let states = seen.borrow();
    assert_eq!(states.len(), 1);
    assert!(states[0].session.is_none());
    assert!(states[0].user.is_none());
}

#[test]
fn user_present_iff_session_present_across_mutations() {
    let mut store = SessionStore::new();
    let seen = record_states(&mut store);

    store.apply(SessionEvent::Resolved(None));
    store.set_session(Some(make_session("a")));
    store.set_session(Some(make_session("b")));
    store.set_session(None);
    store.apply(SessionEvent::Resolved(Some(make_session("c"))));

    for state in seen.borrow().iter() {
        assert_eq!(state.user.is_some(), state.session.is_some());
        if let (Some(user), Some(session)) = (&state.user, &state.session) {
            assert_eq!(*user, session.user);
        }
    }
}

// =============================================================
// apply — provider events
// =============================================================

#[test]
fn first_resolved_event_clears_loading_and_sets_session_together() {
    let mut store = SessionStore::new();
    let seen = record_states(&mut store);

    store.apply(SessionEvent::Resolved(Some(make_session("u1"))));

    let states = seen.borrow();
    assert_eq!(states.len(), 1);
    assert!(!states[0].loading);
    assert_eq!(states[0].user, Some(make_user("u1")));
}

#[test]
fn resolved_absent_ends_loading_signed_out() {
    let mut store = SessionStore::new();
    store.apply(SessionEvent::Resolved(None));
    let state = store.state();
    assert!(!state.loading);
    assert!(state.session.is_none());
    assert!(state.user.is_none());
}

#[test]
fn loading_stays_false_after_first_resolution() {
    let mut store = SessionStore::new();
    store.apply(SessionEvent::Resolved(None));
    store.apply(SessionEvent::Resolved(Some(make_session("u1"))));
    assert!(!store.state().loading);
    store.apply(SessionEvent::Resolved(None));
    assert!(!store.state().loading);
}

// =============================================================
// set_loading
// =============================================================

#[test]
fn set_loading_false_twice_notifies_once() {
    let mut store = SessionStore::new();
    let seen = record_states(&mut store);

    store.set_loading(false);
    store.set_loading(false);

    assert_eq!(seen.borrow().len(), 1);
    assert!(!store.state().loading);
}

// =============================================================
// subscribe / unsubscribe
// =============================================================

#[test]
fn notifications_run_synchronously_on_every_mutation() {
    let mut store = SessionStore::new();
    let seen = record_states(&mut store);

    store.set_loading(false);
    store.set_session(Some(make_session("u1")));
    store.set_session(None);

    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = SessionStore::new();
    let count = Rc::new(RefCell::new(0_usize));
    let sink = count.clone();
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.set_loading(false);
    store.unsubscribe(id);
    store.set_session(Some(make_session("u1")));

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn all_subscribers_see_the_same_state() {
    let mut store = SessionStore::new();
    let first = record_states(&mut store);
    let second = record_states(&mut store);

    store.apply(SessionEvent::Resolved(Some(make_session("u1"))));

    assert_eq!(*first.borrow(), *second.borrow());
}
