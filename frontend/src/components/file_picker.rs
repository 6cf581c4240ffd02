//! Archive picker: hidden native input, styled proxy button and the
//! "selected file" chip.
//!
//! Rejections (several files, wrong extension, over the limit) are silent
//! here; they resurface as the missing-archive message at submit time.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{describe_file, files_from_input};
use crate::{FieldId, FormState, SelectedArchive, ACCEPTED_EXTENSION};

#[component]
pub fn FilePicker(
    state: RwSignal<FormState>,
    /// Browser handle of the accepted file, read when the form is submitted
    file: StoredValue<Option<File>>,
    input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let advertised = state.with_untracked(|s| s.limits().advertised);

    // Handler pour le changement de fichier
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = files_from_input(&input);
        let described: Vec<SelectedArchive> = files.iter().map(describe_file).collect();

        let accepted = state
            .try_update(|s| s.choose_files(&described))
            .unwrap_or(false);
        file.set_value(if accepted { files.into_iter().next() } else { None });
    };

    // Le bouton visible ouvre l'input natif caché
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_clear = move |_| {
        log::info!("Cleared selected archive");
        state.update(FormState::clear_file);
        file.set_value(None);
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    view! {
        <div
            class="file-picker"
            class:flash=move || state.with(|s| s.is_flashing(FieldId::Archive))
        >
            <h2>"Accepts only one .zip file containing text or JSON files"</h2>
            <h3>"Less than or equal to " {advertised}</h3>

            <input
                type="file"
                id=FieldId::Archive.element_id()
                name="filename"
                accept=ACCEPTED_EXTENSION
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
            />

            <button type="button" class="upload-button" on:click=open_picker>
                "📤 Choose a .zip archive"
            </button>

            <Show
                when=move || state.with(|s| s.selected().is_some())
                fallback=|| view! { }
            >
                <div class="file-chip">
                    <span class="file-chip-name">
                        {move || state.with(|s| s.selected().map(|f| f.name.clone()).unwrap_or_default())}
                    </span>
                    <button
                        type="button"
                        class="file-chip-clear"
                        aria-label="Clear selected file"
                        on:click=on_clear
                    >
                        "×"
                    </button>
                </div>
            </Show>
        </div>
    }
}
