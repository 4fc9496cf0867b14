//! Error taxonomy for backend API calls.
//!
//! Every variant renders to the single user-visible string the views show, so
//! pages never match on transport details.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Errors produced by [`crate::net::api`] calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("{0}")]
    Network(String),

    /// The request was aborted after the configured timeout.
    #[error("timeout of {secs}s exceeded")]
    Timeout { secs: u64 },

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response from server: {0}")]
    Decode(String),

    /// A 2xx response whose payload reports failure.
    #[error("{0}")]
    Application(String),
}

/// Broad error class used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Network,
    Server,
    Application,
}

impl ApiError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Network(_) | Self::Timeout { .. } => ErrorClass::Network,
            Self::Server { .. } | Self::Decode(_) => ErrorClass::Server,
            Self::Application(_) => ErrorClass::Application,
        }
    }

    /// Message for the view, or `fallback` when the error carries no text.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { fallback.to_owned() } else { message }
    }

    /// Build a `Server` error from a non-2xx status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = body_error_message(body).unwrap_or_else(|| status_failed_message(status));
        Self::Server { status, message }
    }
}

pub(crate) fn status_failed_message(status: u16) -> String {
    format!("Request failed with status code {status}")
}

/// Pull a human-readable message out of a JSON error body.
///
/// Looks at `detail`, `message`, `error.message`, then `error`, in that order.
pub(crate) fn body_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let candidates = [
        value.get("detail"),
        value.get("message"),
        value.get("error").and_then(|e| e.get("message")),
        value.get("error"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}
