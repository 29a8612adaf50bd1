use leptos::prelude::*;

/// Labelled input bound to `value`, with its validation message underneath.
#[component]
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] disabled: Signal<bool>,
    /// Run after every edit, e.g. to drop a stale error.
    on_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id.clone() class="form-label">{label}</label>
            <input
                id=id.clone()
                name=id
                type=input_type
                class="input"
                class:input-invalid=move || error.get().is_some()
                placeholder=placeholder
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    on_edit.run(());
                }
            />
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}
