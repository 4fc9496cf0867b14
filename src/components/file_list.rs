//! Selected-file rows shown before upload.

#[cfg(test)]
#[path = "file_list_test.rs"]
mod file_list_test;

use leptos::prelude::*;

use crate::state::upload::SelectedFile;

/// Display-only copy of a `SelectedFile`, free of browser handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub name: String,
    pub size: String,
    pub mime: String,
}

impl From<&SelectedFile> for FileRow {
    fn from(file: &SelectedFile) -> Self {
        Self { name: file.name.clone(), size: file.size_label(), mime: file.mime_label().to_owned() }
    }
}

pub fn file_rows(files: &[SelectedFile]) -> Vec<FileRow> {
    files.iter().map(FileRow::from).collect()
}

#[component]
pub fn FileList(#[prop(into)] rows: Signal<Vec<FileRow>>) -> impl IntoView {
    view! {
        <ul class="file-list">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li class="file-list__item">
                                <div class="file-list__text">
                                    <span class="file-list__name">{row.name}</span>
                                    <span class="file-list__size">{row.size}</span>
                                </div>
                                <span class="chip chip--small">{row.mime}</span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
