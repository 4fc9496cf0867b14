//! REST calls against the question-answering backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, each bounded by an
//! abort timer. Host builds (tests, tooling): stubs returning an error since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call makes exactly one attempt and returns `Result<_, ApiError>`.
//! Transport failures, non-2xx statuses, undecodable bodies, and failure
//! payloads each map to their own variant; views flatten them to one message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{HealthStatus, QueryRequest, QueryResponse, UploadResponse};
use crate::state::upload::SelectedFile;

pub const UPLOAD_PATH: &str = "/upload-documents";
pub const QUERY_PATH: &str = "/query";
pub const HEALTH_PATH: &str = "/health";

/// Multipart field name repeated once per uploaded file.
pub const UPLOAD_FIELD: &str = "files";

#[cfg(any(test, feature = "csr"))]
fn decode_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Upload a batch of files to `POST /upload-documents` as multipart form data.
///
/// # Errors
///
/// Returns `Network`/`Timeout` on transport failure, `Server`/`Decode` on a bad
/// response, and `Application` when the payload status is not `"success"`.
pub async fn upload_documents(files: &[SelectedFile]) -> Result<UploadResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        for file in files {
            form.append_with_blob(UPLOAD_FIELD, &file.handle)
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        }
        let body = transport::fetch_text(transport::Verb::Post, UPLOAD_PATH, |b| b.body(form)).await?;
        let resp: UploadResponse = decode_json(&body)?;
        resp.into_result()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = files;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Submit a question to `POST /query`.
///
/// # Errors
///
/// Returns `Network`/`Timeout` on transport failure and `Server`/`Decode` on a
/// bad response.
pub async fn submit_query(request: &QueryRequest) -> Result<QueryResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = transport::fetch_text(transport::Verb::Post, QUERY_PATH, |b| b.json(request)).await?;
        decode_json(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Fetch the backend health payload from `GET /health`.
///
/// Not used by the views; exposed for monitoring hooks.
///
/// # Errors
///
/// Returns `Network`/`Timeout` on transport failure and `Server`/`Decode` on a
/// bad response.
pub async fn check_health() -> Result<HealthStatus, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = transport::fetch_text(transport::Verb::Get, HEALTH_PATH, |b| b.build()).await?;
        decode_json(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

#[cfg(feature = "csr")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder};
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    use crate::config::ApiConfig;
    use crate::net::error::ApiError;

    pub(super) enum Verb {
        Get,
        Post,
    }

    impl Verb {
        fn as_str(&self) -> &'static str {
            match self {
                Self::Get => "GET",
                Self::Post => "POST",
            }
        }
    }

    /// Aborts the wrapped request when the timer fires. Dropping it disarms
    /// the timer.
    struct AbortTimer {
        controller: AbortController,
        _timer: Timeout,
    }

    impl AbortTimer {
        fn arm(millis: u32) -> Option<Self> {
            let controller = AbortController::new().ok()?;
            let abort = controller.clone();
            let timer = Timeout::new(millis, move || abort.abort());
            Some(Self { controller, _timer: timer })
        }

        fn fired(&self) -> bool {
            self.controller.signal().aborted()
        }
    }

    fn transport_error(timer: Option<&AbortTimer>, config: &ApiConfig, err: gloo_net::Error) -> ApiError {
        if timer.is_some_and(AbortTimer::fired) {
            ApiError::Timeout { secs: config.timeout_secs }
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// Send one request and return the body text of a 2xx response.
    pub(super) async fn fetch_text<F>(verb: Verb, path: &str, build: F) -> Result<String, ApiError>
    where
        F: FnOnce(RequestBuilder) -> Result<Request, gloo_net::Error>,
    {
        let config = ApiConfig::from_build_env();
        let url = config.endpoint(path);
        let timer = AbortTimer::arm(config.timeout_ms());
        let signal = timer.as_ref().map(|t| t.controller.signal());

        let builder = match &verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
        }
        .abort_signal(signal.as_ref());
        let request = build(builder).map_err(|e| ApiError::Network(e.to_string()))?;

        leptos::logging::log!("{} {url}", verb.as_str());
        let result = async {
            let response = request.send().await.map_err(|e| transport_error(timer.as_ref(), &config, e))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| transport_error(timer.as_ref(), &config, e))?;
            if response.ok() { Ok(body) } else { Err(ApiError::from_status(status, &body)) }
        }
        .await;

        if let Err(e) = &result {
            leptos::logging::warn!("request failed: url={url} class={:?} error={e}", e.class());
        }
        result
    }
}
