use bioai_core::validation::check_upload;
use bioai_core::UploadFile;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::read_upload;
use crate::state::use_app;

/// Drop zone plus file picker. Files are checked for extension and size
/// before their bytes are read.
#[component]
pub fn FileUpload(
    /// Currently selected file, owned by the parent form.
    #[prop(into)]
    selected: Signal<Option<UploadFile>>,
    on_select: Callback<UploadFile>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let config = use_app().config;
    let accept = config.accept_attribute();
    let input_ref = NodeRef::<Input>::new();
    let (is_over, set_is_over) = signal(false);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_file = move |file: web_sys::File| {
        let size = file.size().max(0.0) as u64;
        if let Err(e) = check_upload(&file.name(), size, &config) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_is_loading.set(true);
        spawn_local(async move {
            let result = read_upload(file).await;
            // Unmounted while reading
            if set_is_loading.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(upload) => on_select.run(upload),
                Err(e) => {
                    tracing::warn!("{}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            set_is_over.set(false);
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                handle_file(file);
            }
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
    };

    let on_remove_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_error.set(None);
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
        on_remove.run(());
    };

    view! {
        <div class="file-upload">
            <div
                class="drop-zone"
                class:drop-zone-active=move || is_over.get()
                class:drop-zone-error=move || error.get().is_some()
                class:drop-zone-loading=move || is_loading.get()
                on:click=move |_| {
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |_| set_is_over.set(false)
                on:drop=on_drop
            >
                <input
                    node_ref=input_ref
                    type="file"
                    class="file-input-hidden"
                    accept=accept
                    on:change=on_input_change
                />
                {move || match selected.get() {
                    Some(file) => view! {
                        <div class="file-selected">
                            <p class="file-name">{file.name.clone()}</p>
                            <p class="file-size">{format!("{:.2} KB", file.size() as f64 / 1024.0)}</p>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="drop-zone-content">
                            <p class="drop-zone-title">"Click to upload or drag and drop"</p>
                            <p class="drop-zone-hint">"FASTA or GenBank files (.fasta, .fa, .gb, .gbk)"</p>
                            <p class="drop-zone-hint">"Maximum file size: 10MB"</p>
                        </div>
                    }.into_any(),
                }}
            </div>

            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}

            <Show when=move || selected.get().is_some() && error.get().is_none()>
                <button class="btn btn-link" on:click=on_remove_click>"Remove file"</button>
            </Show>
        </div>
    }
}
