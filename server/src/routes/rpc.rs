//! HTTP adapter for the RPC procedure router.
//!
//! ARCHITECTURE
//! ============
//! The adapter owns exactly three jobs: build a [`Context`] from the
//! optional bearer header, forward `(procedure, input)` into the router,
//! and surface the result unchanged. Failed dispatches are logged as
//! `(path, error)` pairs in development mode only; production stays
//! silent and lets the error envelope speak for itself.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod tests;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;

use crate::rpc::Context;
use crate::rpc::error::RpcError;
use crate::state::AppState;

/// Extract a bearer token from the `Authorization` header, if present.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();
    (!token.is_empty()).then_some(token)
}

/// Build the per-request context from the optional bearer token.
///
/// Verification failures and missing verifier configuration both resolve
/// to an anonymous context; procedures that need a caller reject it
/// themselves.
async fn build_context(state: &AppState, headers: &HeaderMap) -> Context {
    let Some(token) = bearer_token(headers) else {
        return Context::anonymous();
    };
    let Some(verifier) = &state.verifier else {
        return Context::anonymous();
    };
    match verifier.verify(token).await {
        Ok(user) => Context { user },
        Err(e) => {
            tracing::warn!(error = %e, "bearer verification failed");
            Context::anonymous()
        }
    }
}

fn fail(state: &AppState, procedure: &str, error: RpcError) -> Response {
    if state.dev_mode {
        tracing::error!(path = %procedure, error = %error, "rpc dispatch failed");
    }
    error.into_response()
}

/// `POST /api/rpc/{procedure}` — forward one call into the procedure
/// router. An empty body dispatches with a null input.
pub async fn handle_rpc(
    State(state): State<AppState>,
    Path(procedure): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let input = if body.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(e) => {
                return fail(&state, &procedure, RpcError::BadRequest(format!("malformed input: {e}")));
            }
        }
    };

    let ctx = build_context(&state, &headers).await;
    match state.rpc.dispatch(&procedure, ctx, input).await {
        Ok(output) => Json(output).into_response(),
        Err(error) => fail(&state, &procedure, error),
    }
}
