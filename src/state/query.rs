//! Query view state: the question form and the single in-flight outcome.
//!
//! DESIGN
//! ======
//! The outcome is one enum so a result and an error can never be shown
//! together. A new attempt replaces whatever the previous one left behind.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::error::ApiError;
use crate::net::types::{QueryRequest, QueryResponse};

pub const TEMPERATURE_MIN: f64 = 0.1;
pub const TEMPERATURE_MAX: f64 = 1.0;
pub const TEMPERATURE_STEP: f64 = 0.1;
pub const TEMPERATURE_DEFAULT: f64 = 0.7;

pub const MAX_TOKENS_MIN: u32 = 128;
pub const MAX_TOKENS_MAX: u32 = 1024;
pub const MAX_TOKENS_STEP: u32 = 64;
pub const MAX_TOKENS_DEFAULT: u32 = 512;

pub const QUERY_ERROR_FALLBACK: &str = "An error occurred while processing your query";

/// Clamp to `[0.1, 1.0]` and snap to the nearest tenth.
pub fn snap_temperature(raw: f64) -> f64 {
    if raw.is_nan() {
        return TEMPERATURE_DEFAULT;
    }
    let clamped = raw.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
    // Divide by ten rather than multiply by the step so 0.7 stays 0.7.
    (clamped * 10.0).round() / 10.0
}

/// Clamp to `[128, 1024]` and snap to the 64-token grid starting at 128.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn snap_max_tokens(raw: f64) -> u32 {
    if raw.is_nan() {
        return MAX_TOKENS_DEFAULT;
    }
    let clamped = raw.clamp(f64::from(MAX_TOKENS_MIN), f64::from(MAX_TOKENS_MAX));
    let steps = ((clamped - f64::from(MAX_TOKENS_MIN)) / f64::from(MAX_TOKENS_STEP)).round() as u32;
    (MAX_TOKENS_MIN + steps * MAX_TOKENS_STEP).min(MAX_TOKENS_MAX)
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryForm {
    pub text: String,
    pub use_documents: bool,
    pub use_web_search: bool,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            use_documents: true,
            use_web_search: false,
            temperature: TEMPERATURE_DEFAULT,
            max_tokens: MAX_TOKENS_DEFAULT,
        }
    }
}

impl QueryForm {
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn has_retrieval_mode(&self) -> bool {
        self.use_documents || self.use_web_search
    }

    pub fn set_temperature(&mut self, raw: f64) {
        self.temperature = snap_temperature(raw);
    }

    pub fn set_max_tokens(&mut self, raw: f64) {
        self.max_tokens = snap_max_tokens(raw);
    }

    /// Build the wire request. `use_documents` is only sent as `true` when
    /// documents have actually been uploaded this session.
    pub fn to_request(&self, documents_available: bool) -> Option<QueryRequest> {
        let query = self.trimmed();
        if query.is_empty() {
            return None;
        }
        Some(QueryRequest {
            query: query.to_owned(),
            use_documents: self.use_documents && documents_available,
            use_web_search: self.use_web_search,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryOutcome {
    #[default]
    Idle,
    Loading,
    Answered(QueryResponse),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    pub form: QueryForm,
    pub outcome: QueryOutcome,
}

impl QueryState {
    pub fn in_flight(&self) -> bool {
        self.outcome == QueryOutcome::Loading
    }

    /// Disabled iff the trimmed text is empty, no retrieval mode is checked,
    /// or a request is already in flight.
    pub fn can_submit(&self) -> bool {
        !self.form.trimmed().is_empty() && self.form.has_retrieval_mode() && !self.in_flight()
    }

    /// Drop the previous result/error, enter `Loading`, and return the request.
    pub fn begin(&mut self, documents_available: bool) -> Option<QueryRequest> {
        if !self.can_submit() {
            return None;
        }
        let request = self.form.to_request(documents_available)?;
        self.outcome = QueryOutcome::Loading;
        Some(request)
    }

    pub fn finish(&mut self, result: Result<QueryResponse, ApiError>) {
        if !self.in_flight() {
            return;
        }
        self.outcome = match result {
            Ok(resp) => QueryOutcome::Answered(resp),
            Err(e) => QueryOutcome::Failed(e.user_message(QUERY_ERROR_FALLBACK)),
        };
    }

    pub fn result(&self) -> Option<&QueryResponse> {
        match &self.outcome {
            QueryOutcome::Answered(resp) => Some(resp),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            QueryOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}
