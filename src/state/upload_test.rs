#![cfg(not(feature = "csr"))]

use super::*;

fn file(name: &str) -> SelectedFile {
    SelectedFile::new(name, 2048, "text/plain")
}

fn success(processed: u64, chunks: u64) -> UploadResponse {
    UploadResponse { status: "success".to_owned(), processed_documents: processed, total_chunks: chunks, message: None }
}

fn selected(names: &[&str]) -> UploadState {
    let mut state = UploadState::default();
    state.select(names.iter().map(|n| file(n)).collect());
    state
}

// =============================================================
// Extension filter
// =============================================================

#[test]
fn is_accepted_matches_supported_extensions_case_insensitively() {
    for name in ["a.txt", "b.pdf", "c.doc", "d.docx", "e.md", "REPORT.PDF", "notes.Md"] {
        assert!(is_accepted(name), "{name}");
    }
}

#[test]
fn is_accepted_rejects_other_names() {
    for name in ["image.png", "archive.tar.gz", "txt", ".md", "README", "doc.docx.exe"] {
        assert!(!is_accepted(name), "{name}");
    }
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_filters_and_moves_to_files_selected() {
    let mut state = UploadState::default();
    let rejected = state.select(vec![file("a.txt"), file("b.png"), file("c.md")]);
    assert_eq!(rejected, 1);
    assert_eq!(state.phase, UploadPhase::FilesSelected);
    let names: Vec<_> = state.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "c.md"]);
}

#[test]
fn select_replaces_prior_selection_wholesale() {
    let mut state = selected(&["a.txt", "b.txt"]);
    state.select(vec![file("c.pdf")]);
    assert_eq!(state.files.len(), 1);
    assert_eq!(state.files[0].name, "c.pdf");
}

#[test]
fn select_with_nothing_accepted_returns_to_idle() {
    let mut state = selected(&["a.txt"]);
    state.select(vec![file("photo.jpg")]);
    assert!(state.files.is_empty());
    assert_eq!(state.phase, UploadPhase::Idle);
    assert!(!state.can_submit());
}

#[test]
fn select_clears_previous_status() {
    let mut state = selected(&["a.txt"]);
    state.begin();
    state.finish(Err(ApiError::Network("offline".to_owned())));
    assert!(state.status.is_some());
    state.select(vec![file("b.txt")]);
    assert_eq!(state.status, None);
}

#[test]
fn select_is_ignored_while_uploading() {
    let mut state = selected(&["a.txt"]);
    state.begin();
    assert_eq!(state.select(vec![file("b.txt")]), 0);
    assert_eq!(state.files[0].name, "a.txt");
    assert!(state.is_uploading());
}

// =============================================================
// Upload lifecycle
// =============================================================

#[test]
fn begin_requires_files() {
    let mut state = UploadState::default();
    assert_eq!(state.begin(), None);
    assert_eq!(state.phase, UploadPhase::Idle);
}

#[test]
fn begin_enters_uploading_and_blocks_resubmit() {
    let mut state = selected(&["a.txt"]);
    let batch = state.begin().unwrap();
    assert_eq!(batch.len(), 1);
    assert!(state.is_uploading());
    assert!(!state.can_submit());
    assert!(!state.can_clear());
    assert_eq!(state.begin(), None);
}

#[test]
fn two_txt_files_success_reports_counts_and_enables_documents() {
    let mut state = selected(&["policy.txt", "faq.txt"]);
    state.begin();
    let available = state.finish(Ok(success(2, 14)));
    assert!(available);
    assert_eq!(state.phase, UploadPhase::Succeeded);
    assert!(!state.is_uploading());
    assert_eq!(
        state.status,
        Some(UploadStatus::Success("Successfully processed 2 documents with 14 chunks.".to_owned()))
    );
    assert!(state.files.is_empty());
}

#[test]
fn failure_status_payload_surfaces_message() {
    let mut state = selected(&["a.txt"]);
    state.begin();
    let resp = UploadResponse {
        status: "error".to_owned(),
        processed_documents: 0,
        total_chunks: 0,
        message: Some("Could not parse a.txt".to_owned()),
    };
    assert!(!state.finish(Ok(resp)));
    assert_eq!(state.phase, UploadPhase::Failed);
    assert_eq!(state.status, Some(UploadStatus::Error("Could not parse a.txt".to_owned())));
    assert_eq!(state.files.len(), 1);
}

#[test]
fn failure_without_message_uses_fallback() {
    let mut state = selected(&["a.txt"]);
    state.begin();
    state.finish(Err(ApiError::Application(String::new())));
    assert_eq!(state.status, Some(UploadStatus::Error("Upload failed".to_owned())));
}

#[test]
fn transport_error_is_shown_verbatim() {
    let mut state = selected(&["a.txt"]);
    state.begin();
    state.finish(Err(ApiError::from_status(500, "")));
    assert_eq!(state.status.as_ref().map(UploadStatus::message), Some("Request failed with status code 500"));
    assert!(state.can_submit());
}

#[test]
fn every_outcome_is_terminal_and_leaves_uploading_false() {
    let outcomes: Vec<Result<UploadResponse, ApiError>> = vec![
        Ok(success(1, 3)),
        Err(ApiError::Network("reset".to_owned())),
        Err(ApiError::Timeout { secs: 120 }),
        Err(ApiError::Decode("bad".to_owned())),
        Err(ApiError::Application("nope".to_owned())),
    ];
    for outcome in outcomes {
        let mut state = selected(&["a.md"]);
        state.begin();
        state.finish(outcome);
        assert!(!state.is_uploading());
        assert!(matches!(state.phase, UploadPhase::Succeeded | UploadPhase::Failed));
        assert!(state.status.is_some());
    }
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut state = selected(&["a.txt"]);
    assert!(!state.finish(Ok(success(1, 1))));
    assert_eq!(state.phase, UploadPhase::FilesSelected);
    assert_eq!(state.status, None);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_resets_to_idle() {
    let mut state = selected(&["a.txt"]);
    state.begin();
    state.finish(Err(ApiError::Network("x".to_owned())));
    assert!(state.clear());
    assert_eq!(state, UploadState::default());
}

#[test]
fn clear_is_refused_mid_upload() {
    let mut state = selected(&["a.txt"]);
    state.begin();
    assert!(!state.clear());
    assert!(state.is_uploading());
}

// =============================================================
// File labels
// =============================================================

#[test]
fn size_label_formats_megabytes() {
    assert_eq!(SelectedFile::new("a.pdf", 1_572_864, "application/pdf").size_label(), "1.50 MB");
    assert_eq!(SelectedFile::new("a.txt", 0, "").size_label(), "0.00 MB");
}

#[test]
fn mime_label_defaults_to_unknown() {
    assert_eq!(SelectedFile::new("a.md", 10, "").mime_label(), "unknown");
    assert_eq!(SelectedFile::new("a.md", 10, "text/markdown").mime_label(), "text/markdown");
}
