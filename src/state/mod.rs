//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with transition methods. Pages wrap them in Leptos signals;
//! only `session` is shared through context.

pub mod query;
pub mod session;
pub mod ui;
pub mod upload;
