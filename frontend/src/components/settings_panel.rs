//! Slide-in settings panel with the two presentation switches.
//!
//! The panel is always rendered so the slide animation can run both ways;
//! the `open` class drives visibility. Clicking the backdrop closes the
//! panel and leaves both switches as they were.

use leptos::*;
use web_sys::MouseEvent;

use crate::FormState;

#[component]
pub fn SettingsPanel(state: RwSignal<FormState>) -> impl IntoView {
    let is_open = move || state.with(|s| s.settings_open());

    let instructions = Signal::derive(move || state.with(|s| s.instructions_visible()));
    let natural_language = Signal::derive(move || state.with(|s| s.natural_language()));

    view! {
        <div
            class="settings-backdrop"
            class:open=is_open
            on:click=move |_| state.update(FormState::close_settings)
        >
            <aside
                class="settings-panel"
                class:open=is_open
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <h2 class="settings-title">"Settings"</h2>
                <ToggleSwitch
                    label="Show instructions"
                    checked=instructions
                    on_toggle=Callback::new(move |_| state.update(FormState::toggle_instructions))
                />
                <ToggleSwitch
                    label="Natural-language query"
                    checked=natural_language
                    on_toggle=Callback::new(move |_| state.update(FormState::toggle_natural_language))
                />
            </aside>
        </div>
    }
}

/// Animated on/off switch.
#[component]
pub fn ToggleSwitch(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="toggle">
            <span class="toggle-label">{label}</span>
            <button
                type="button"
                role="switch"
                class="toggle-track"
                class:on=move || checked.get()
                aria-checked=move || checked.get().to_string()
                aria-label=label
                on:click=move |_| on_toggle.call(())
            >
                <span class="toggle-thumb"></span>
            </button>
        </div>
    }
}
