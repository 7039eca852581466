mod config;
mod routes;
mod rpc;
mod services;
mod state;

use std::sync::Arc;

use services::identity::{HttpVerifier, IdentityVerifier};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port = config::port();
    let dev_mode = config::dev_mode();

    // Token verification is delegated to the external identity provider
    // (non-fatal: bearer tokens resolve to no user if config is missing).
    let verifier: Option<Arc<dyn IdentityVerifier>> = match HttpVerifier::from_env() {
        Some(v) => {
            tracing::info!(provider = v.base_url(), "identity verifier initialized");
            Some(Arc::new(v))
        }
        None => {
            tracing::warn!("IDENTITY_API_URL/IDENTITY_API_KEY not set — bearer tokens will not resolve to a user");
            None
        }
    };

    let state = state::AppState::new(verifier, dev_mode, rpc::procedures::router());

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, dev_mode, "vestibule listening");
    axum::serve(listener, app).await.expect("server failed");
}
