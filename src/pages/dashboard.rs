use std::time::Duration;

use bioai_core::toast::ToastKind;
use bioai_core::validation::{check_submission, InputMethod};
use bioai_core::{AnalysisResult, SequenceType, UploadFile};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::sleep;
use crate::components::error_message::ErrorMessage;
use crate::components::file_upload::FileUpload;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::results_display::ResultsDisplay;
use crate::components::sequence_input::SequenceInput;
use crate::components::sequence_tabs::SequenceTabs;
use crate::state::use_app;

/// Keeps the spinner from flashing on fast responses.
const MIN_LOADING: Duration = Duration::from_millis(300);

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let active = RwSignal::new(SequenceType::Dna);
    let sequence = RwSignal::new(String::new());
    let file = RwSignal::new(None::<UploadFile>);
    let method = RwSignal::new(InputMethod::Text);
    let result = RwSignal::new(None::<AnalysisResult>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_tab_change = Callback::new(move |ty: SequenceType| {
        active.set(ty);
        sequence.set(String::new());
        file.set(None);
        method.set(InputMethod::Text);
        error.set(None);
        result.set(None);
    });

    let on_input = Callback::new(move |value: String| {
        sequence.set(value);
        method.set(InputMethod::Text);
        file.set(None);
        error.set(None);
    });

    let on_select = Callback::new(move |upload: UploadFile| {
        file.set(Some(upload));
        method.set(InputMethod::File);
        sequence.set(String::new());
        error.set(None);
    });

    let on_remove = Callback::new(move |_: ()| {
        file.set(None);
        method.set(InputMethod::Text);
    });

    let on_analyze = Callback::new(move |_: ()| {
        if loading.get_untracked() {
            return;
        }
        error.set(None);
        result.set(None);

        let input_method = method.get_untracked();
        let text = sequence.get_untracked();
        let upload = file.get_untracked();
        if let Err(e) = check_submission(input_method, &text, upload.is_some()) {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        let ty = active.get_untracked();
        let app = app.clone();
        spawn_local(async move {
            let started = js_sys::Date::now();
            let gateway = app.gateway();
            let outcome = match (input_method, upload) {
                (InputMethod::File, Some(upload)) => gateway.upload(upload, ty).await,
                _ => gateway.analyze(text.trim(), ty).await,
            };

            let elapsed = Duration::from_millis((js_sys::Date::now() - started).max(0.0) as u64);
            if let Some(rest) = MIN_LOADING.checked_sub(elapsed) {
                sleep(rest).await;
            }

            // Unmounted while waiting
            if loading.try_set(false).is_some() {
                return;
            }
            match outcome {
                Ok(analysis) => {
                    result.set(Some(analysis));
                    app.toast(ToastKind::Success, "Analysis completed successfully!");
                }
                Err(e) => {
                    let message = e.to_string();
                    error.set(Some(message.clone()));
                    app.toast(ToastKind::Error, message);
                }
            }
        });
    });

    let can_submit = move || {
        !loading.get() && (!sequence.with(|s| s.trim().is_empty()) || file.with(Option::is_some))
    };

    view! {
        <div class="page dashboard-page">
            <h1 class="page-title">"Sequence Analysis"</h1>
            <p class="page-subtitle">"Analyze DNA, RNA, or protein sequences to get detailed insights"</p>

            <section class="card">
                <SequenceTabs active=active on_change=on_tab_change />

                <div class="input-section">
                    <h3 class="section-title">"Enter Sequence Manually"</h3>
                    <SequenceInput
                        value=sequence
                        sequence_type=active
                        on_input=on_input
                        on_submit=on_analyze
                    />
                </div>

                <div class="divider"><span>"OR"</span></div>

                <div class="input-section">
                    <h3 class="section-title">"Upload Sequence File"</h3>
                    <FileUpload selected=file on_select=on_select on_remove=on_remove />
                </div>

                <ErrorMessage message=error />

                <div class="actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || !can_submit()
                        on:click=move |_| on_analyze.run(())
                    >
                        {move || if loading.get() { "Analyzing..." } else { "Analyze Sequence" }}
                    </button>
                </div>
            </section>

            <Show when=move || loading.get()>
                <section class="card">
                    <LoadingSpinner size=SpinnerSize::Large label="Processing your sequence..." />
                </section>
            </Show>

            {move || {
                (!loading.get())
                    .then(|| result.get())
                    .flatten()
                    .map(|analysis| view! { <ResultsDisplay result=analysis /> })
            }}
        </div>
    }
}
