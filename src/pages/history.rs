use leptos::prelude::*;

use crate::components::history_list::HistoryList;

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <div class="page history-page">
            <h1 class="page-title">"Analysis History"</h1>
            <p class="page-subtitle">
                "View and revisit your previous sequence analyses. Click on any analysis to see the full results."
            </p>
            <HistoryList />
        </div>
    }
}
