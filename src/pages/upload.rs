//! Document upload page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the upload state machine for the lifetime of the tab. A successful
//! upload marks documents available in the shared session so the query page
//! can enable document search.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::components::alert::{Severity, StatusAlert};
use crate::components::drop_zone::DropZone;
use crate::components::file_list::{FileList, file_rows};
use crate::net::error::ApiError;
use crate::net::types::UploadResponse;
use crate::state::session::SessionState;
use crate::state::upload::{SelectedFile, UploadState};

/// Apply a finished upload.
///
/// The session flag follows `result` alone: the page may have been unmounted
/// while the request was in flight, disposing `upload`, but the backend still
/// holds the documents.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn complete_upload(
    upload: RwSignal<UploadState, LocalStorage>,
    session: RwSignal<SessionState>,
    result: Result<UploadResponse, ApiError>,
) {
    let result = result.and_then(UploadResponse::into_result);
    if result.is_ok() {
        session.update(SessionState::mark_documents_uploaded);
    }
    if upload.try_update(|s| s.finish(result)).is_none() {
        leptos::logging::log!("upload finished after leaving the upload page");
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    // Local storage: browser `File` handles are not `Send`.
    let upload = RwSignal::new_local(UploadState::default());

    let uploading = move || upload.with(UploadState::is_uploading);

    let on_files = Callback::new(move |files: Vec<SelectedFile>| {
        let mut rejected = 0;
        upload.update(|s| rejected = s.select(files));
        if rejected > 0 {
            leptos::logging::log!("ignored {rejected} file(s) with unsupported extensions");
        }
    });

    let on_upload = move |_| {
        let mut batch = None;
        upload.update(|s| batch = s.begin());
        let Some(batch) = batch else {
            return;
        };
        leptos::logging::log!("uploading {} file(s)", batch.len());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::upload_documents(&batch).await;
            complete_upload(upload, session, result);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (batch, session);
        }
    };

    let on_clear = move |_| {
        upload.update(|s| {
            s.clear();
        });
    };

    view! {
        <section class="upload-page">
            <h2 class="page-title">"Upload Documents"</h2>

            <DropZone on_files=on_files disabled=Signal::derive(move || upload.with(UploadState::is_uploading))/>

            <Show when=move || upload.with(|s| !s.files.is_empty())>
                <div class="upload-page__selection">
                    <h3 class="section-title">
                        {move || format!("Selected Files ({})", upload.with(|s| s.files.len()))}
                    </h3>
                    <FileList rows=Signal::derive(move || upload.with(|s| file_rows(&s.files)))/>
                    <div class="upload-page__actions">
                        <button
                            class="btn btn--primary"
                            on:click=on_upload
                            disabled=move || !upload.with(UploadState::can_submit)
                        >
                            <Show when=uploading>
                                <span class="spinner" aria-hidden="true"></span>
                            </Show>
                            {move || if uploading() { "Processing..." } else { "Upload & Process" }}
                        </button>
                        <button
                            class="btn btn--outlined"
                            on:click=on_clear
                            disabled=move || !upload.with(UploadState::can_clear)
                        >
                            "Clear Files"
                        </button>
                    </div>
                </div>
            </Show>

            {move || {
                upload
                    .with(|s| s.status.clone())
                    .map(|status| {
                        let severity = if status.is_success() { Severity::Success } else { Severity::Error };
                        view! { <StatusAlert severity=severity message=status.message().to_owned()/> }
                    })
            }}
        </section>
    }
}
