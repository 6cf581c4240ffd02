//! Transient status banner.
//!
//! Each new notice (a new status ticket) schedules its own expiry; a newer
//! notice or a manual dismissal cancels the pending timer, and the ticket
//! check in [`FormState::expire_status`] ignores anything that slips through.

use leptos::*;

use crate::{FormState, TransientTimer, STATUS_DISMISS_MS};

#[component]
pub fn StatusBanner(state: RwSignal<FormState>) -> impl IntoView {
    let timer = TransientTimer::new();
    let ticket = create_memo(move |_| state.with(|s| s.status_ticket()));

    create_effect(move |_| {
        let ticket = ticket.get();
        if state.with_untracked(|s| s.status().is_active()) {
            timer.schedule(STATUS_DISMISS_MS, move || {
                state.update(|s| s.expire_status(ticket));
            });
        }
    });

    let on_dismiss = move |_| {
        timer.cancel();
        state.update(FormState::dismiss_status);
    };

    view! {
        <Show
            when=move || state.with(|s| s.status().is_active())
            fallback=|| view! { }
        >
            <div class=move || state.with(|s| s.status().css_class()) role="status">
                <span class="status-message">
                    {move || state.with(|s| s.status().message().unwrap_or_default().to_string())}
                </span>
                <button type="button" class="status-dismiss" aria-label="Dismiss" on:click=on_dismiss>
                    "×"
                </button>
            </div>
        </Show>
    }
}
