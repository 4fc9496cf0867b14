//! Shell chrome state: which tab is showing.
//!
//! DESIGN
//! ======
//! Each tab is a route, so the active tab is derived from the location rather
//! than stored. Unmounting the inactive view discards its local state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs in the shell header, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Upload,
    Ask,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Upload, Tab::Ask];

    pub fn path(self) -> &'static str {
        match self {
            Self::Upload => "/",
            Self::Ask => "/ask",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload Documents",
            Self::Ask => "Ask Questions",
        }
    }

    /// Resolve the active tab from a router pathname.
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').ends_with("/ask") { Self::Ask } else { Self::Upload }
    }
}
