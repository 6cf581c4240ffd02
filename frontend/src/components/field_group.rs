//! Labeled text input with a focus highlight.
//!
//! Validation is not done here; the submission workflow decides what is
//! missing and drives the `flash` highlight through `flashing`.

use leptos::*;

use crate::FieldId;

#[component]
pub fn FieldGroup(
    field: FieldId,
    value: RwSignal<String>,
    #[prop(into)] flashing: Signal<bool>,
    /// Render a textarea instead of a single-line input
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let (focused, set_focused) = create_signal(false);

    let input = if multiline {
        view! {
            <textarea
                id=field.element_id()
                placeholder=field.placeholder()
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                type="text"
                id=field.element_id()
                placeholder=field.placeholder()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            />
        }
        .into_view()
    };

    view! {
        <div
            class="field-group"
            class:focused=move || focused.get()
            class:flash=move || flashing.get()
        >
            <label for=field.element_id()>{field.label()}</label>
            {input}
        </div>
    }
}
