use super::*;

// =============================================================
// UploadResponse
// =============================================================

#[test]
fn upload_response_success_decodes() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"status":"success","processed_documents":2,"total_chunks":14}"#).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.processed_documents, 2);
    assert_eq!(resp.total_chunks, 14);
    assert_eq!(resp.message, None);
    assert_eq!(resp.clone().into_result(), Ok(resp));
}

#[test]
fn upload_response_failure_status_becomes_application_error() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"status":"error","message":"Unsupported file type"}"#).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.processed_documents, 0);
    assert_eq!(resp.into_result(), Err(ApiError::Application("Unsupported file type".to_owned())));
}

#[test]
fn upload_response_failure_without_message_has_empty_error() {
    let resp: UploadResponse = serde_json::from_str(r#"{"status":"partial"}"#).unwrap();
    assert_eq!(resp.into_result(), Err(ApiError::Application(String::new())));
}

// =============================================================
// QueryRequest
// =============================================================

#[test]
fn query_request_serializes_wire_field_names() {
    let req = QueryRequest {
        query: "What is the refund policy?".to_owned(),
        use_documents: true,
        use_web_search: false,
        max_tokens: 512,
        temperature: 0.7,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "query": "What is the refund policy?",
            "use_documents": true,
            "use_web_search": false,
            "max_tokens": 512,
            "temperature": 0.7,
        })
    );
}

// =============================================================
// QueryResponse / Method / Source
// =============================================================

#[test]
fn query_response_decodes_document_answer() {
    let resp: QueryResponse = serde_json::from_str(
        r#"{"answer":"Refunds within 30 days.","method":"document","confidence":0.82,
            "sources":[{"source":"document","score":0.91,"text":"Refunds are accepted..."}]}"#,
    )
    .unwrap();
    assert_eq!(resp.method, Method::Document);
    assert_eq!(resp.confidence, 0.82);
    assert_eq!(resp.sources.len(), 1);
    assert_eq!(resp.sources[0].origin(), SourceOrigin::Document);
}

#[test]
fn query_response_missing_sources_defaults_empty() {
    let resp: QueryResponse =
        serde_json::from_str(r#"{"answer":"I don't know.","method":"llm_only","confidence":0.2}"#).unwrap();
    assert!(resp.sources.is_empty());
    assert_eq!(resp.method, Method::Other("llm_only".to_owned()));
}

#[test]
fn method_parses_known_and_unknown_values() {
    assert_eq!(Method::from("document".to_owned()), Method::Document);
    assert_eq!(Method::from("web_search".to_owned()), Method::WebSearch);
    assert_eq!(Method::from("hybrid".to_owned()), Method::Other("hybrid".to_owned()));
}

#[test]
fn method_serializes_back_to_raw_string() {
    assert_eq!(serde_json::to_string(&Method::WebSearch).unwrap(), "\"web_search\"");
    assert_eq!(serde_json::to_string(&Method::Other("fallback".to_owned())).unwrap(), "\"fallback\"");
}

#[test]
fn source_origin_treats_non_document_as_web() {
    let source = |label: &str| Source { source: label.to_owned(), score: 0.5, text: String::new() };
    assert_eq!(source("document").origin(), SourceOrigin::Document);
    assert_eq!(source("web").origin(), SourceOrigin::Web);
    assert_eq!(source("web_search").origin(), SourceOrigin::Web);
}
