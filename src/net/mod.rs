//! Networking modules for the question-answering backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `types` defines the wire schema, and
//! `error` classifies failures into one user-visible message.

pub mod api;
pub mod error;
pub mod types;
