use leptos::prelude::*;

const CAPABILITIES: [(&str, &str); 6] = [
    ("Multi-Format Support", "Analyze DNA, RNA, and protein sequences"),
    ("File Upload", "Support for FASTA and GenBank formats"),
    ("GC Content Analysis", "Precise calculation of GC percentage"),
    ("Interactive Visualizations", "Charts for nucleotide composition"),
    ("Analysis History", "Track and revisit previous analyses"),
    ("Secure Authentication", "Protected user accounts and data"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h1 class="page-title">"About BioAI Analyzer"</h1>

            <section class="card">
                <h2 class="card-title">"Project Overview"</h2>
                <p>
                    "BioAI Analyzer gives researchers and bioinformatics professionals a browser-based "
                    "workspace for biological sequence analysis. DNA, RNA and protein sequences can be "
                    "typed in or uploaded as FASTA and GenBank files, and the results cover GC content, "
                    "nucleotide frequencies, protein translation and open reading frame detection."
                </p>
                <p>
                    "Results are visualized with charts, and every analysis is kept in a personal history "
                    "so earlier work can be revisited at any time."
                </p>
            </section>

            <section class="card">
                <h2 class="card-title">"Technology Stack"</h2>
                <div class="about-grid">
                    <div class="about-panel">
                        <h3>"Frontend"</h3>
                        <ul>
                            <li><strong>"Rust + Leptos"</strong>" - reactive UI compiled to WebAssembly"</li>
                            <li><strong>"reqwest"</strong>" - HTTP client running on the browser's fetch"</li>
                        </ul>
                    </div>
                    <div class="about-panel">
                        <h3>"Backend"</h3>
                        <ul>
                            <li><strong>"FastAPI"</strong>" - high-performance Python web framework"</li>
                            <li><strong>"Biopython"</strong>" - comprehensive bioinformatics library"</li>
                        </ul>
                    </div>
                </div>
            </section>

            <section class="card">
                <h2 class="card-title">"Scientific Foundation"</h2>
                <p>
                    "Sequence analysis is powered by Biopython, a widely used and peer-reviewed "
                    "bioinformatics library."
                </p>
                <blockquote class="citation">
                    "Cock, P.J.A. et al. (2009). Biopython: freely available Python tools for computational "
                    "molecular biology and bioinformatics. "
                    <em>"Bioinformatics"</em>
                    ", 25(11), 1422\u{2013}1423. DOI: "
                    <a href="https://doi.org/10.1093/bioinformatics/btp163" target="_blank" rel="noopener noreferrer">
                        "10.1093/bioinformatics/btp163"
                    </a>
                </blockquote>
            </section>

            <section class="card">
                <h2 class="card-title">"Key Capabilities"</h2>
                <div class="about-grid">
                    {CAPABILITIES
                        .iter()
                        .map(|(title, detail)| view! {
                            <div class="capability">
                                <span class="capability-check">"\u{2713}"</span>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*detail}</p>
                                </div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
