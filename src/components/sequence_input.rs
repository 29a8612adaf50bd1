use bioai_core::validation::{residue_count, sequence_error};
use bioai_core::SequenceType;
use leptos::prelude::*;

/// Sequence editor with live alphabet checking. Ctrl+Enter submits.
#[component]
pub fn SequenceInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] sequence_type: Signal<SequenceType>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let error = Memo::new(move |_| sequence_error(&value.get(), sequence_type.get()));

    view! {
        <div class="sequence-input">
            <textarea
                class="input sequence-textarea"
                class:input-invalid=move || error.get().is_some()
                rows="8"
                spellcheck="false"
                placeholder=move || format!("Enter {} sequence here...", sequence_type.get())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && ev.ctrl_key() {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                }
            ></textarea>
            <div class="sequence-input-footer">
                <span class="char-count">
                    {move || format!("Characters: {}", residue_count(&value.get()))}
                </span>
                {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
            </div>
        </div>
    }
}
