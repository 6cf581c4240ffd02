use leptos::*;

use crate::FormState;

#[component]
pub fn Header(state: RwSignal<FormState>) -> impl IntoView {
    // Handler pour le bouton Settings
    let on_settings_click = move |_| {
        log::debug!("⚙️ Toggling settings panel");
        state.update(FormState::toggle_settings);
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"ROTTEN"</a>
                <span class="badge">"Relevance Optimized Text Trimming"</span>
            </div>
            <div class="header-right">
                <button
                    id="settings-btn"
                    class="settings-button"
                    class:active=move || state.with(|s| s.settings_open())
                    on:click=on_settings_click
                >
                    "Settings"
                </button>
            </div>
        </header>
    }
}
