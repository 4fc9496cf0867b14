//! Wire DTOs for the question-answering backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly. Open-ended string enums
//! (`method`, `source`) keep the raw value so unknown strategies still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Arbitrary JSON returned by `GET /health`.
pub type HealthStatus = serde_json::Value;

/// Response body of `POST /upload-documents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// `"success"` on success; anything else is an application failure.
    pub status: String,
    #[serde(default)]
    pub processed_documents: u64,
    #[serde(default)]
    pub total_chunks: u64,
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Convert an HTTP 200 with a failure status into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Application`] carrying the payload message (possibly
    /// empty) when `status` is not `"success"`.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Application(self.message.unwrap_or_default()))
        }
    }
}

/// Request body of `POST /query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub use_documents: bool,
    pub use_web_search: bool,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Response body of `POST /query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub method: Method,
    pub confidence: f64,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Retrieval strategy that produced an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    Document,
    WebSearch,
    /// Model-only fallback or any strategy this client does not know.
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "document",
            Self::WebSearch => "web_search",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Method {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "document" => Self::Document,
            "web_search" => Self::WebSearch,
            _ => Self::Other(raw),
        }
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        match method {
            Method::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A retrieved passage cited in support of an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Origin label, `"document"` or `"web"` in practice.
    pub source: String,
    pub score: f64,
    pub text: String,
}

/// Where a cited passage came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceOrigin {
    Document,
    Web,
}

impl Source {
    pub fn origin(&self) -> SourceOrigin {
        if self.source == "document" { SourceOrigin::Document } else { SourceOrigin::Web }
    }
}
