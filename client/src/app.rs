//! App shell — context wiring, session event loop, and the route table.
//!
//! ARCHITECTURE
//! ============
//! The shell owns the `SessionStore` and is its only writer. Pages and the
//! identity-provider bridge communicate through a [`SessionSender`] event
//! queue; the store mirrors every mutation into an `RwSignal` that the
//! gate and pages read from context.

use futures::channel::mpsc::UnboundedSender;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::loading::LoadingIndicator;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::{SessionEvent, SessionState};
use crate::util::gate::{self, NavOutcome};

#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::util::session_cache;
#[cfg(feature = "hydrate")]
use futures::StreamExt;

/// Queue handle for delivering session events to the store.
///
/// Cloneable so any page can dispatch; sends are fire-and-forget and are
/// dropped silently when no event loop is running (SSR).
#[derive(Clone)]
pub struct SessionSender(UnboundedSender<SessionEvent>);

impl SessionSender {
    pub fn send(&self, event: SessionEvent) {
        let _ = self.0.unbounded_send(event);
    }
}

/// HTML document shell used by the server's SSR integration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let (event_tx, event_rx) = futures::channel::mpsc::unbounded::<SessionEvent>();
    provide_context(session);
    provide_context(SessionSender(event_tx));

    // Single-threaded session event loop: owns the store, mirrors every
    // mutation into the context signal, and resolves the cached token with
    // the provider as the first event.
    #[cfg(feature = "hydrate")]
    {
        let mut event_rx = event_rx;
        leptos::task::spawn_local(async move {
            let mut store = SessionStore::new();
            store.subscribe(move |state| session.set(state.clone()));

            let initial = match session_cache::load_token() {
                Some(token) => crate::net::api::fetch_session(&token).await,
                None => None,
            };
            if initial.is_none() {
                session_cache::clear_token();
            }
            store.apply(SessionEvent::Resolved(initial));

            while let Some(event) = event_rx.next().await {
                match &event {
                    SessionEvent::Resolved(Some(new_session)) => session_cache::save_token(&new_session.token),
                    SessionEvent::Resolved(None) => session_cache::clear_token(),
                }
                store.apply(event);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop(event_rx);

    view! {
        <Title text="Vestibule"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="not-found">"Not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <ParentRoute path=path!("") view=AuthGate>
                        <Route path=path!("login") view=LoginPage/>
                        <Route path=path!("register") view=RegisterPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Entry gate over the unauthenticated screens.
///
/// Exactly one of three outcomes renders: the loading indicator, a
/// redirect to the authenticated entry point, or the bare auth stack with
/// no header chrome.
#[component]
pub fn AuthGate() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    move || match gate::decide(&session.get()) {
        NavOutcome::Loading => view! { <LoadingIndicator/> }.into_any(),
        NavOutcome::RedirectAuthenticated => view! { <Redirect path="/"/> }.into_any(),
        NavOutcome::ShowAuthScreens => view! { <Outlet/> }.into_any(),
    }
}
