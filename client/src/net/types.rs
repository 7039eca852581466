//! Wire DTOs for the identity provider and the RPC bridge.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the provider's and the server's JSON
//! payloads so serde round-trips stay lossless; the server keeps its own
//! copies of the shapes it serves.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity record associated with a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// Credential bundle issued by the identity provider.
///
/// The token is opaque to the client; it is only ever echoed back as a
/// bearer header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// Identity the token was issued for.
    pub user: User,
}

/// Error envelope returned by the RPC bridge on failed dispatches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub error: RpcErrorDetail,
}

/// Machine-readable code plus human-readable message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorDetail {
    pub code: String,
    pub message: String,
}
