//! Drag-and-drop target with a click-to-browse fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Converts browser `File` handles into `SelectedFile`s and hands the whole
//! drop to the page. Extension filtering happens in `UploadState::select`,
//! the input's `accept` attribute only narrows the picker.

#[cfg(test)]
#[path = "drop_zone_test.rs"]
mod drop_zone_test;

use leptos::prelude::*;

use crate::state::upload::{ACCEPT_ATTR, SelectedFile};

/// Nesting depth of `dragenter`/`dragleave` pairs.
///
/// Moving the pointer from the zone onto a child fires `dragenter` on the
/// child before `dragleave` on the zone, so the count only returns to zero
/// when the pointer actually leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragDepth(u32);

impl DragDepth {
    pub fn enter(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn leave(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn is_active(self) -> bool {
        self.0 > 0
    }
}

#[cfg(feature = "csr")]
fn files_from_list(list: &web_sys::FileList) -> Vec<SelectedFile> {
    (0..list.length()).filter_map(|i| list.get(i)).map(SelectedFile::from_file).collect()
}

#[component]
pub fn DropZone(on_files: Callback<Vec<SelectedFile>>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let depth = RwSignal::new(DragDepth::default());
    let drag_active = Memo::new(move |_| depth.get().is_active());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_dragenter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            depth.update(|d| *d = d.enter());
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| ev.prevent_default();

    let on_dragleave = move |_ev: leptos::ev::DragEvent| depth.update(|d| *d = d.leave());

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        depth.set(DragDepth::default());
        if disabled.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
                on_files.run(files_from_list(&list));
            }
        }
    };

    let on_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            if let Some(list) = input.files() {
                on_files.run(files_from_list(&list));
            }
            // Reset so picking the same files again still fires `change`.
            input.set_value("");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, on_files);
        }
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone--active=move || drag_active.get()
            class:drop-zone--disabled=move || disabled.get()
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <input
                class="drop-zone__input"
                type="file"
                multiple=true
                accept=ACCEPT_ATTR
                node_ref=input_ref
                on:change=on_change
            />
            <p class="drop-zone__headline">
                {move || {
                    if drag_active.get() { "Drop files here" } else { "Drag & drop files here, or click to select" }
                }}
            </p>
            <p class="drop-zone__hint">"Supported formats: PDF, DOC, DOCX, TXT, MD"</p>
        </div>
    }
}
