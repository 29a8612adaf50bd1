use bioai_core::charts::percentage;
use bioai_core::{AnalysisResult, SequenceType};
use leptos::prelude::*;

use crate::components::charts::{CompositionBarChart, CompositionPieChart};

#[component]
fn Stat(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="stat">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
        </div>
    }
}

/// Renders one analysis result: statistics, composition table, protein
/// translation, ORFs and charts. Sections without data are omitted.
#[component]
pub fn ResultsDisplay(result: AnalysisResult) -> impl IntoView {
    let unit = result.sequence_type.length_unit();
    let is_protein = result.sequence_type == SequenceType::Protein;
    let length = result.sequence_length;
    let counts_title = if is_protein { "Amino Acid Counts" } else { "Nucleotide Counts" };
    let symbol_header = if is_protein { "Amino Acid" } else { "Nucleotide" };
    let composition = result.composition().cloned();

    let counts_table = composition.clone().map(|counts| {
        view! {
            <section class="card">
                <h3 class="card-title">{counts_title}</h3>
                <table class="counts-table">
                    <thead>
                        <tr>
                            <th>{symbol_header}</th>
                            <th>"Count"</th>
                            <th>"Percentage"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {counts
                            .into_iter()
                            .map(|(symbol, count)| view! {
                                <tr>
                                    <td>{symbol}</td>
                                    <td>{count}</td>
                                    <td>{format!("{:.2}%", percentage(count, length))}</td>
                                </tr>
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>
        }
    });

    let protein = result.protein_sequence.clone().filter(|p| !p.is_empty()).map(|p| {
        view! {
            <section class="card">
                <h3 class="card-title">"Protein Sequence"</h3>
                <p class="mono-block">{p}</p>
            </section>
        }
    });

    let orfs = result.orfs.clone().filter(|o| !o.is_empty()).map(|orfs| {
        view! {
            <section class="card">
                <h3 class="card-title">"Open Reading Frames (ORFs)"</h3>
                <div class="orf-list">
                    {orfs
                        .into_iter()
                        .map(|orf| view! {
                            <div class="orf">
                                <div class="orf-meta">
                                    <span>"Start: " <strong>{orf.start}</strong></span>
                                    <span>"End: " <strong>{orf.end}</strong></span>
                                    <span>"Length: " <strong>{format!("{} bp", orf.len())}</strong></span>
                                </div>
                                <p class="mono-block">{orf.sequence}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        }
    });

    let charts = composition.map(|counts| {
        view! {
            <div class="chart-grid">
                <section class="card">
                    <h3 class="card-title">{if is_protein { "Amino Acid Distribution" } else { "Nucleotide Distribution" }}</h3>
                    <CompositionBarChart counts=counts.clone() />
                </section>
                <section class="card">
                    <h3 class="card-title">"Composition"</h3>
                    <CompositionPieChart counts=counts />
                </section>
            </div>
        }
    });

    view! {
        <div class="results">
            <h2 class="results-title">"Analysis Results"</h2>

            <section class="card">
                <h3 class="card-title">"Statistics"</h3>
                <div class="stat-grid">
                    <Stat label="Sequence Type" value=result.sequence_type.to_string() />
                    <Stat label="Sequence Length" value=format!("{} {}", length, unit) />
                    {result.gc_content.map(|gc| view! {
                        <Stat label="GC Content" value=format!("{:.2}%", gc) />
                    })}
                    {result.molecular_weight.map(|mw| view! {
                        <Stat label="Molecular Weight" value=format!("{:.2} Da", mw) />
                    })}
                    {result.isoelectric_point.map(|pi| view! {
                        <Stat label="Isoelectric Point" value=format!("{:.2}", pi) />
                    })}
                </div>
            </section>

            {counts_table}
            {protein}
            {orfs}
            {charts}
        </div>
    }
}
