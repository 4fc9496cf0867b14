//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per shell tab. Each page owns its view state and delegates
//! rendering details to `components`.

pub mod ask;
pub mod upload;
