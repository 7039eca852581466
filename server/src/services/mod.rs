//! Domain services used by the RPC bridge.
//!
//! ARCHITECTURE
//! ============
//! Service modules own outbound-provider concerns so route handlers can
//! stay focused on protocol translation and auth plumbing.

pub mod identity;
