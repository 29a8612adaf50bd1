use bioai_core::history::{format_timestamp, sequence_preview};
use bioai_core::{HistoryRecord, SequenceType};
use leptos::prelude::*;

fn badge_class(ty: Option<SequenceType>) -> &'static str {
    match ty {
        Some(SequenceType::Dna) => "badge badge-dna",
        Some(SequenceType::Rna) => "badge badge-rna",
        Some(SequenceType::Protein) => "badge badge-protein",
        None => "badge badge-unknown",
    }
}

#[component]
pub fn HistoryItem(
    record: HistoryRecord,
    on_view: Callback<HistoryRecord>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = record.id;
    let ty = record.sequence_type();
    let type_label = ty.map(|t| t.to_string()).unwrap_or_else(|| "Unknown".to_string());
    let preview = sequence_preview(&record.input_sequence);
    let timestamp = format_timestamp(&record.created_at, &chrono::Local);
    let view_label = format!("View details for {} analysis from {}", type_label, timestamp);

    view! {
        <div class="history-item">
            <div class="history-field">
                <p class="history-field-label">"Type"</p>
                <span class=badge_class(ty)>{type_label}</span>
            </div>
            <div class="history-field history-field-wide">
                <p class="history-field-label">"Sequence Preview"</p>
                <p class="mono">{preview}</p>
            </div>
            <div class="history-field">
                <p class="history-field-label">"Date"</p>
                <p class="history-date">{timestamp}</p>
            </div>
            <div class="history-actions">
                <button
                    class="btn btn-primary btn-small"
                    aria-label=view_label
                    on:click=move |_| on_view.run(record.clone())
                >
                    "View Details"
                </button>
                <button
                    class="btn btn-danger btn-small"
                    aria-label="Delete analysis"
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
