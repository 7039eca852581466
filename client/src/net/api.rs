//! HTTP helpers for the identity provider and the server's RPC bridge.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these calls are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so sign-in and
//! session-resolution failures degrade to form messages or a signed-out
//! state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::Session;

/// Same-origin prefix used when no provider URL is baked in at build time;
/// deployments either front the provider here or set `IDENTITY_API_URL`.
#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_IDENTITY_BASE: &str = "/identity";

#[cfg(any(test, feature = "hydrate"))]
fn identity_base() -> String {
    option_env!("IDENTITY_API_URL")
        .unwrap_or(DEFAULT_IDENTITY_BASE)
        .trim_end_matches('/')
        .to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn sessions_endpoint() -> String {
    format!("{}/v1/sessions", identity_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    format!("{}/v1/users", identity_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn current_session_endpoint() -> String {
    format!("{}/v1/sessions/current", identity_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn rpc_endpoint(procedure: &str) -> String {
    format!("/api/rpc/{procedure}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    match status {
        401 | 403 => "invalid email or password".to_owned(),
        _ => format!("sign-in failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    match status {
        409 => "an account with this email already exists".to_owned(),
        _ => format!("sign-up failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn rpc_failed_message(status: u16) -> String {
    format!("rpc call failed: {status}")
}

/// Sign in against the identity provider, returning the issued session.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the provider
/// rejects the credentials.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&sessions_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account with the identity provider, returning the issued
/// session (the provider signs a new account in immediately).
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the provider
/// rejects the registration.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&users_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_up_failed_message(resp.status()));
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Revalidate a cached token with the provider.
/// Returns `None` if the token is no longer valid or on the server.
pub async fn fetch_session(token: &str) -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&current_session_endpoint())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Revoke the current session with the provider. Failures are ignored;
/// the local state is cleared regardless.
pub async fn sign_out(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::delete(&current_session_endpoint())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Call an RPC procedure through the server bridge, attaching the bearer
/// token when one is supplied.
///
/// # Errors
///
/// Returns the bridge's error message if the HTTP request fails or the
/// dispatch is rejected.
pub async fn call_rpc(procedure: &str, token: Option<&str>, input: &Value) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&rpc_endpoint(procedure));
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .json(input)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            if let Ok(body) = resp.json::<super::types::RpcErrorBody>().await {
                return Err(body.error.message);
            }
            return Err(rpc_failed_message(status));
        }
        resp.json::<Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (procedure, token, input);
        Err("not available on server".to_owned())
    }
}
