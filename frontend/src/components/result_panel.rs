//! Download panel for the trimmed archive returned by the backend.

use leptos::*;

use crate::archive::{file_count_label, format_megabytes};
use crate::FormState;

#[component]
pub fn ResultPanel(state: RwSignal<FormState>) -> impl IntoView {
    let result = create_memo(move |_| state.with(|s| s.result().cloned()));

    // Fermer le panneau - aucun appel réseau
    let on_dismiss = move |_| {
        log::info!("🗑️ Result dismissed");
        state.update(FormState::dismiss_result);
    };

    view! {
        {move || result.get().map(|archive| view! {
            <div class="result-panel show" id="resultPanel">
                <div class="result-header">
                    <div class="result-title">"📦 Trimmed archive"</div>
                    <button class="btn btn-secondary" id="dismissResultBtn" on:click=on_dismiss>
                        "Dismiss"
                    </button>
                </div>
                <div class="result-summary">
                    <strong>{file_count_label(archive.file_count)}</strong>
                    " • "
                    <strong>{format_megabytes(archive.size_bytes)}</strong>
                </div>
                <div class="result-footer">
                    <a
                        class="btn btn-primary"
                        href=archive.data_url.clone()
                        download=archive.file_name.clone()
                    >
                        {format!("Download {}", archive.file_name)}
                    </a>
                </div>
            </div>
        })}
    }
}
