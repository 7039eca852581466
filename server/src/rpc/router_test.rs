use serde_json::{Value, json};

use super::error::RpcError;
use super::*;
use crate::state::test_helpers::dummy_user;

// =============================================================
// Router
// =============================================================

#[tokio::test]
async fn dispatch_unknown_procedure_is_not_found() {
    let router = Router::new();
    let error = router
        .dispatch("no.such.procedure", Context::anonymous(), Value::Null)
        .await
        .unwrap_err();
    assert!(matches!(error, RpcError::NotFound(name) if name == "no.such.procedure"));
}

#[tokio::test]
async fn dispatch_runs_the_registered_procedure() {
    let router = Router::new().procedure("echo", |_ctx, input| async move { Ok(input) });
    let output = router
        .dispatch("echo", Context::anonymous(), json!({ "x": 1 }))
        .await
        .unwrap();
    assert_eq!(output, json!({ "x": 1 }));
}

#[tokio::test]
async fn later_registration_replaces_earlier() {
    let router = Router::new()
        .procedure("value", |_ctx, _input| async { Ok(json!(1)) })
        .procedure("value", |_ctx, _input| async { Ok(json!(2)) });
    let output = router.dispatch("value", Context::anonymous(), Value::Null).await.unwrap();
    assert_eq!(output, json!(2));
}

#[test]
fn contains_reports_registration() {
    let router = Router::new().procedure("a", |_ctx, _input| async { Ok(Value::Null) });
    assert!(router.contains("a"));
    assert!(!router.contains("b"));
}

// =============================================================
// Context
// =============================================================

#[test]
fn require_user_rejects_anonymous_context() {
    let error = Context::anonymous().require_user().unwrap_err();
    assert!(matches!(error, RpcError::Unauthorized(_)));
}

#[test]
fn require_user_returns_the_attached_user() {
    let user = dummy_user();
    let ctx = Context { user: Some(user.clone()) };
    assert_eq!(ctx.require_user().unwrap(), &user);
}
