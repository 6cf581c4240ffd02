//! Query form and the submission workflow.
//!
//! On submit the current field values are snapshotted from the registry
//! and handed to [`FormState::begin_submit`]. When validation passes the
//! archive is read and Base64-encoded, then sent in a single request. The
//! outcome is folded back into the state; only a success resets the form.

use leptos::*;
use web_sys::{File, SubmitEvent};

use crate::services::{read_base64, submit_query, UserInputResponse};
use crate::{
    submit_url, AppError, AppResult, FieldGroup, FieldId, FieldRegistry, FilePicker, FormState,
    SubmitIntent, TransientTimer, CLEARED_ON_SUCCESS, FLASH_MS,
};

#[component]
pub fn QueryForm(state: RwSignal<FormState>) -> impl IntoView {
    let registry = FieldRegistry::new();
    let file = store_value(None::<File>);
    let input_ref = create_node_ref::<html::Input>();

    // Missing fields flash for a while after each rejected submit.
    let flash_timer = TransientTimer::new();
    let flash_ticket = create_memo(move |_| state.with(|s| s.flash_ticket()));
    create_effect(move |_| {
        let ticket = flash_ticket.get();
        if state.with_untracked(|s| s.has_flashing()) {
            flash_timer.schedule(FLASH_MS, move || state.update(|s| s.expire_flash(ticket)));
        }
    });

    let reset_picker = move || {
        file.set_value(None);
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let on_submit = {
        let registry = registry.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let values = registry.snapshot();
            let Some(SubmitIntent::Encode(archive)) = state.try_update(|s| s.begin_submit(&values))
            else {
                return;
            };

            let Some(picked) = file.get_value() else {
                log::error!("❌ No browser file behind {}", archive.name);
                state.update(|s| {
                    s.failed(&AppError::Encoding("the selected file is no longer available".into()))
                });
                return;
            };

            let registry = registry.clone();
            spawn_local(async move {
                let outcome = run_submission(state, picked).await;
                if settle_submission(state, &registry, outcome) {
                    reset_picker();
                }
            });
        }
    };

    let description = registry.signal(FieldId::Description);
    let structured = registry.clone();

    view! {
        <form id="query-form" class="query-form" on:submit=on_submit>
            <Show
                when=move || state.with(|s| s.natural_language())
                fallback=move || view! {
                    <div class="structured-fields">
                        {FieldId::STRUCTURED
                            .into_iter()
                            .map(|field| view! {
                                <FieldGroup
                                    field=field
                                    value=structured.signal(field)
                                    flashing=flash_signal(state, field)
                                />
                            })
                            .collect_view()}
                    </div>
                }
            >
                <div class="natural-language-field">
                    <FieldGroup
                        field=FieldId::Description
                        value=description
                        flashing=flash_signal(state, FieldId::Description)
                        multiline=true
                    />
                </div>
            </Show>

            <FilePicker state=state file=file input_ref=input_ref/>

            <Show
                when=move || state.with(|s| s.submit_visible())
                fallback=|| view! { }
            >
                <button
                    type="submit"
                    class="btn btn-primary"
                    id="submitBtn"
                    disabled=move || state.with(|s| s.submit_disabled())
                >
                    {move || state.with(|s| s.submit_label())}
                </button>
            </Show>
        </form>
    }
}

fn flash_signal(state: RwSignal<FormState>, field: FieldId) -> Signal<bool> {
    Signal::derive(move || state.with(|s| s.is_flashing(field)))
}

/// Fold the outcome of a submission into the form.
///
/// A success clears the [`CLEARED_ON_SUCCESS`] fields and returns `true`;
/// the caller then empties the native picker. A failure leaves every field as typed.
fn settle_submission(
    state: RwSignal<FormState>,
    registry: &FieldRegistry,
    outcome: AppResult<UserInputResponse>,
) -> bool {
    match outcome {
        Ok(response) => {
            let applied = state.try_update(|s| s.succeeded(response)).unwrap_or(false);
            if applied {
                registry.clear(&CLEARED_ON_SUCCESS);
            }
            applied
        }
        Err(e) => {
            state.update(|s| s.failed(&e));
            false
        }
    }
}

/// Encode the picked file, then send it. Exactly one encode per call.
async fn run_submission(state: RwSignal<FormState>, file: File) -> AppResult<UserInputResponse> {
    let zip_file = read_base64(&file).await?;
    let request = state
        .try_update(|s| s.encoded(zip_file))
        .flatten()
        .ok_or_else(|| AppError::Encoding("the submission was no longer pending".into()))?;
    submit_query(&request, &submit_url()).await
}
