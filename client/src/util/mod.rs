//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate navigation-gating decisions and browser storage
//! concerns from page and component logic to keep both testable.

pub mod gate;
pub mod session_cache;
