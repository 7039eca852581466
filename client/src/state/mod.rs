//! Client state containers provided via context.
//!
//! ARCHITECTURE
//! ============
//! State lives in explicitly-owned containers with plain mutation methods;
//! the app shell mirrors them into `RwSignal` context values so components
//! re-render without owning the containers themselves.

pub mod session;
