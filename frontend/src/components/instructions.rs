//! Instructions section, hidden through the settings panel

use leptos::*;

use crate::FormState;

#[component]
pub fn Instructions(state: RwSignal<FormState>) -> impl IntoView {
    let advertised = state.with_untracked(|s| s.limits().advertised);

    view! {
        <Show
            when=move || state.with(|s| s.instructions_visible())
            fallback=|| view! { }
        >
            <section class="instructions">
                <h1>"Relevance Optimized Text Trimming"</h1>
                <ol class="subtitle">
                    <li>"Describe what you are looking for, either in your own words or through the five fields."</li>
                    <li>"Pick one .zip archive of text or JSON files, up to " {advertised} "."</li>
                    <li>"Submit and download the trimmed archive that comes back."</li>
                </ol>
                <p class="hint">"Switch between natural-language and field mode in Settings."</p>
            </section>
        </Show>
    }
}
