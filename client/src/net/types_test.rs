use super::*;

// =============================================================
// Wire compatibility
// =============================================================

#[test]
fn session_deserializes_from_provider_payload() {
    let raw = r#"{
        "token": "tok-abc",
        "user": {
            "id": "3b4f2c9e-0000-0000-0000-000000000001",
            "email": "alice@example.com",
            "name": "Alice",
            "avatar_url": null
        }
    }"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.token, "tok-abc");
    assert_eq!(session.user.email, "alice@example.com");
    assert!(session.user.avatar_url.is_none());
}

#[test]
fn rpc_error_body_deserializes_from_bridge_envelope() {
    let raw = r#"{"error":{"code":"UNAUTHORIZED","message":"unauthorized: sign-in required"}}"#;
    let body: RpcErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.error.code, "UNAUTHORIZED");
    assert!(body.error.message.contains("sign-in required"));
}
