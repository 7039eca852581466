//! Home page — the authenticated entry point the gate redirects to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Greets the signed-in user, confirms the session with the server through
//! the RPC bridge, and offers sign-out. Installs the shared unauthenticated
//! redirect so a signed-out session immediately leaves this route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionSender;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionEvent;
use crate::state::session::SessionState;
use crate::util::gate::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let sender = expect_context::<SessionSender>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    // Ask the server who it thinks we are, once a session is available.
    let server_identity = RwSignal::new(None::<String>);
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(current) = session.get().session else {
            return;
        };
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::call_rpc("user.current", Some(&current.token), &serde_json::Value::Null).await {
                Ok(value) => {
                    let name = value.get("name").and_then(|v| v.as_str()).unwrap_or_default().to_owned();
                    server_identity.set(Some(name));
                }
                Err(e) => log::warn!("user.current failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = current;
    });

    let on_sign_out = move |_| {
        let token = session.get().session.map(|s| s.token);
        #[cfg(feature = "hydrate")]
        {
            let sender = sender.clone();
            leptos::task::spawn_local(async move {
                if let Some(token) = token {
                    crate::net::api::sign_out(&token).await;
                }
                sender.send(SessionEvent::Resolved(None));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, sender.clone());
    };

    let display_name = move || session.get().user.map(|user| user.name).unwrap_or_else(|| "there".to_owned());

    view! {
        <div class="home-page">
            <header class="home-header">
                <span class="home-header__brand">"Vestibule"</span>
                <button class="home-header__signout" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </header>
            <main class="home-content">
                <h1>{move || format!("Hello, {}!", display_name())}</h1>
                <Show when=move || server_identity.get().is_some()>
                    <p class="home-content__verified">
                        "Server session verified for "
                        <span>{move || server_identity.get().unwrap_or_default()}</span>
                    </p>
                </Show>
            </main>
        </div>
    }
}
