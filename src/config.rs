//! Backend API configuration captured from build-time environment variables.
//!
//! The app runs inside the browser, so there is no process environment at
//! runtime. Values are baked in with `option_env!` when the WASM bundle is
//! built and parsed by the pure helpers below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 120;

/// Largest delay `setTimeout` honours; larger values wrap negative and fire at once.
pub const MAX_TIMER_MS: u32 = i32::MAX.unsigned_abs();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), timeout_secs: DEFAULT_API_TIMEOUT_SECS }
    }
}

impl ApiConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `DOCQA_API_URL`: backend base URL, default `http://localhost:8000`
    /// - `DOCQA_API_TIMEOUT_SECS`: request timeout, default 120
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("DOCQA_API_URL"), option_env!("DOCQA_API_TIMEOUT_SECS"))
    }

    /// Build config from raw optional strings.
    pub fn from_raw(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        Self { base_url: parse_base_url(base_url), timeout_secs: parse_timeout_secs(timeout_secs) }
    }

    /// Join the base URL with an absolute endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Timeout in milliseconds, capped at [`MAX_TIMER_MS`].
    pub fn timeout_ms(&self) -> u32 {
        let ms = self.timeout_secs.saturating_mul(1000).min(u64::from(MAX_TIMER_MS));
        u32::try_from(ms).unwrap_or(MAX_TIMER_MS)
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_API_TIMEOUT_SECS)
}
