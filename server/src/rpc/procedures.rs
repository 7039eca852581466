//! Built-in procedures exposed through the bridge.

#[cfg(test)]
#[path = "procedures_test.rs"]
mod tests;

use serde_json::{Value, json};

use super::error::RpcError;
use super::{Context, Router};

/// Assemble the application's procedure router.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .procedure("health.ping", ping)
        .procedure("user.current", current_user)
}

/// `health.ping` — public liveness probe echoing the optional `message`
/// input field.
async fn ping(_ctx: Context, input: Value) -> Result<Value, RpcError> {
    let message = match &input {
        Value::Null => None,
        Value::Object(map) => match map.get("message") {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message.clone()),
            Some(_) => return Err(RpcError::BadRequest("message must be a string".to_owned())),
        },
        _ => return Err(RpcError::BadRequest("expected an object input".to_owned())),
    };
    Ok(json!({ "pong": true, "message": message }))
}

/// `user.current` — the verified caller, as the server sees it.
async fn current_user(ctx: Context, _input: Value) -> Result<Value, RpcError> {
    let user = ctx.require_user()?;
    serde_json::to_value(user).map_err(|e| RpcError::Internal(e.to_string()))
}
