//! Cross-view session flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by the shell. The upload page flips `documents_available`
//! after a successful upload; the query page only reads it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session state shared between the upload and query views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub documents_available: bool,
}

impl SessionState {
    /// One-way: once documents exist for this session they stay available.
    pub fn mark_documents_uploaded(&mut self) {
        self.documents_available = true;
    }
}
