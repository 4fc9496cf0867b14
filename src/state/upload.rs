//! Document upload view state.
//!
//! DESIGN
//! ======
//! `Idle -> FilesSelected -> Uploading -> {Succeeded, Failed}`, with `clear`
//! returning to `Idle` from anywhere except `Uploading`. The page wraps this in
//! a local signal; transitions here never touch the network.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::error::ApiError;
use crate::net::types::UploadResponse;

/// File extensions the drop zone accepts (lowercase, without the dot).
pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["txt", "pdf", "doc", "docx", "md"];

/// `accept` attribute for the hidden file input.
pub const ACCEPT_ATTR: &str = ".txt,.pdf,.doc,.docx,.md";

pub const UPLOAD_ERROR_FALLBACK: &str = "Upload failed";

/// Whether a file name carries one of [`ACCEPTED_EXTENSIONS`].
pub fn is_accepted(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty() && ACCEPTED_EXTENSIONS.iter().any(|accepted| ext.eq_ignore_ascii_case(accepted))
    })
}

/// A user-selected file waiting to be uploaded.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Browser-reported MIME type; empty when the browser could not tell.
    pub mime: String,
    #[cfg(feature = "csr")]
    pub handle: web_sys::File,
}

impl SelectedFile {
    #[cfg(not(feature = "csr"))]
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self { name: name.into(), size, mime: mime.into() }
    }

    #[cfg(feature = "csr")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(handle: web_sys::File) -> Self {
        Self { name: handle.name(), size: handle.size().max(0.0) as u64, mime: handle.type_(), handle }
    }

    /// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }

    pub fn mime_label(&self) -> &str {
        if self.mime.is_empty() { "unknown" } else { &self.mime }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    FilesSelected,
    Uploading,
    Succeeded,
    Failed,
}

/// Terminal message shown under the drop zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Success(String),
    Error(String),
}

impl UploadStatus {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub files: Vec<SelectedFile>,
    pub phase: UploadPhase,
    pub status: Option<UploadStatus>,
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    pub fn can_submit(&self) -> bool {
        !self.files.is_empty() && !self.is_uploading()
    }

    pub fn can_clear(&self) -> bool {
        !self.is_uploading()
    }

    /// Replace the selection with the accepted subset of `files`.
    ///
    /// Returns how many files were rejected by the extension filter. Ignored
    /// while an upload is in flight.
    pub fn select(&mut self, files: Vec<SelectedFile>) -> usize {
        if self.is_uploading() {
            return 0;
        }
        let offered = files.len();
        self.files = files.into_iter().filter(|f| is_accepted(&f.name)).collect();
        self.status = None;
        self.phase = if self.files.is_empty() { UploadPhase::Idle } else { UploadPhase::FilesSelected };
        offered - self.files.len()
    }

    /// Enter `Uploading` and hand back the batch to send.
    pub fn begin(&mut self) -> Option<Vec<SelectedFile>> {
        if !self.can_submit() {
            return None;
        }
        self.phase = UploadPhase::Uploading;
        self.status = None;
        Some(self.files.clone())
    }

    /// Apply the upload outcome. Returns `true` when documents became available.
    pub fn finish(&mut self, result: Result<UploadResponse, ApiError>) -> bool {
        if !self.is_uploading() {
            return false;
        }
        match result.and_then(UploadResponse::into_result) {
            Ok(resp) => {
                self.status = Some(UploadStatus::Success(success_message(resp.processed_documents, resp.total_chunks)));
                self.phase = UploadPhase::Succeeded;
                self.files.clear();
                true
            }
            Err(e) => {
                self.status = Some(UploadStatus::Error(e.user_message(UPLOAD_ERROR_FALLBACK)));
                self.phase = UploadPhase::Failed;
                false
            }
        }
    }

    /// Drop the selection and any status message. No-op mid-upload.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        *self = Self::default();
        true
    }
}

pub fn success_message(processed_documents: u64, total_chunks: u64) -> String {
    format!("Successfully processed {processed_documents} documents with {total_chunks} chunks.")
}
