use leptos::*;

use crate::{FormState, Phase};

/// Full-page overlay shown while a submission is in flight.
///
/// Purely presentational: it does not lock anything, the workflow already
/// ignores a second submit.
#[component]
pub fn ProcessingOverlay(state: RwSignal<FormState>) -> impl IntoView {
    view! {
        <Show
            when=move || state.with(|s| s.in_flight())
            fallback=|| view! { }
        >
            <div class="processing-overlay" id="processingOverlay">
                <div class="progress-bar indeterminate">
                    <div class="progress-fill"></div>
                </div>
                <div class="processing-text">
                    {move || match state.with(|s| s.phase()) {
                        Phase::Encoding => "⏳ Reading archive...",
                        _ => "⏳ Trimming your archive...",
                    }}
                </div>
            </div>
        </Show>
    }
}
