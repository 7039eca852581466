//! Networking modules for the identity provider and the RPC bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the wire schema shared
//! with the provider and the server.

pub mod api;
pub mod types;
