//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading session state from
//! context; route-level orchestration stays in `pages`.

pub mod loading;
