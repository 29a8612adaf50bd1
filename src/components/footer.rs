use bioai_core::routes::ABOUT_ROUTE;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <span class="footer-copyright">
                {format!("\u{a9} {} BioAI Analyzer. All rights reserved.", year)}
            </span>
            <div class="footer-links">
                <a href=ABOUT_ROUTE>"About"</a>
                <a href="https://github.com" target="_blank" rel="noopener noreferrer">"GitHub"</a>
                <a href="https://biopython.org" target="_blank" rel="noopener noreferrer">"Biopython"</a>
            </div>
        </footer>
    }
}
