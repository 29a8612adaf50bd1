use bioai_core::history::{HistoryPager, PageLink};
use bioai_core::toast::ToastKind;
use bioai_core::HistoryRecord;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::scroll_to_top;
use crate::components::history_item::HistoryItem;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::components::results_display::ResultsDisplay;
use crate::state::use_app;

/// Paginated list of past analyses with a details panel for the selected one.
#[component]
pub fn HistoryList() -> impl IntoView {
    let app = use_app();
    let pager = RwSignal::new(HistoryPager::new(app.config.history_page_size));
    let selected = RwSignal::new(None::<HistoryRecord>);

    let refresh = {
        let app = app.clone();
        move || {
            if pager.try_update(|p| p.begin_refresh()).is_none() {
                return;
            }
            let gateway = app.gateway();
            spawn_local(async move {
                let result = gateway.history().await;
                pager.try_update(|p| p.finish_refresh(result));
            });
        }
    };
    refresh();

    let on_view = {
        let app = app.clone();
        Callback::new(move |record: HistoryRecord| {
            let id = record.id;
            let needs_fetch = record.results.is_none();
            selected.set(Some(record));
            scroll_to_top();
            if !needs_fetch {
                return;
            }
            let gateway = app.gateway();
            let app = app.clone();
            spawn_local(async move {
                match gateway.analysis(id).await {
                    Ok(full) => {
                        // Only if the same record is still open
                        selected.try_update(|s| {
                            if s.as_ref().is_some_and(|r| r.id == id) {
                                *s = Some(full);
                            }
                        });
                    }
                    Err(e) => app.toast(ToastKind::Error, e.to_string()),
                }
            });
        })
    };

    let on_delete = {
        let app = app.clone();
        let refresh = refresh.clone();
        Callback::new(move |id: i64| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this analysis?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let gateway = app.gateway();
            let app = app.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match gateway.delete_analysis(id).await {
                    Ok(()) => {
                        app.toast(ToastKind::Success, "Analysis deleted");
                        selected.try_update(|s| {
                            if s.as_ref().is_some_and(|r| r.id == id) {
                                *s = None;
                            }
                        });
                        refresh();
                    }
                    Err(e) => app.toast(ToastKind::Error, e.to_string()),
                }
            });
        })
    };

    let details = move || {
        selected.get().map(|record| {
            let body = match record.results {
                Some(result) => view! { <ResultsDisplay result=result /> }.into_any(),
                None => view! {
                    <LoadingSpinner label="Loading analysis..." />
                }
                .into_any(),
            };
            view! {
                <div class="history-details">
                    <div class="history-details-header">
                        <h3>"Analysis Details"</h3>
                        <button
                            class="btn btn-link"
                            aria-label="Close details"
                            on:click=move |_| selected.set(None)
                        >
                            "\u{2715}"
                        </button>
                    </div>
                    {body}
                </div>
            }
        })
    };

    let pagination = move || {
        let p = pager.get();
        (p.total_pages() > 1).then(|| {
            let current = p.current_page();
            view! {
                <div class="pagination">
                    <button
                        class="btn btn-small"
                        aria-label="Previous page"
                        disabled=!p.has_previous_page()
                        on:click=move |_| pager.update(|p| p.previous_page())
                    >
                        "Previous"
                    </button>
                    <div class="page-links">
                        {p.page_links()
                            .into_iter()
                            .map(|link| match link {
                                PageLink::Page(page) => view! {
                                    <button
                                        class="page-link"
                                        class:page-link-current=page == current
                                        aria-label=format!("Go to page {}", page)
                                        aria-current=(page == current).then_some("page")
                                        on:click=move |_| pager.update(|p| p.go_to_page(page))
                                    >
                                        {page}
                                    </button>
                                }
                                .into_any(),
                                PageLink::Ellipsis => view! {
                                    <span class="page-ellipsis">"..."</span>
                                }
                                .into_any(),
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button
                        class="btn btn-small"
                        aria-label="Next page"
                        disabled=!p.has_next_page()
                        on:click=move |_| pager.update(|p| p.next_page())
                    >
                        "Next"
                    </button>
                </div>
            }
        })
    };

    move || {
        let p = pager.get();
        if p.is_loading() {
            return view! {
                <LoadingSpinner size=SpinnerSize::Large label="Loading analysis history..." />
            }
            .into_any();
        }
        if let Some(err) = p.error() {
            return view! {
                <div class="history-error">
                    <p class="history-error-title">"Error Loading History"</p>
                    <p>{err.to_string()}</p>
                </div>
            }
            .into_any();
        }
        if p.items().is_empty() {
            return view! {
                <div class="history-empty">
                    <p class="history-empty-title">"No Analysis History"</p>
                    <p>"Your analysis history will appear here once you start analyzing sequences."</p>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="history">
                {details}
                <div class="history-header">
                    <p>{p.summary()}</p>
                    <p>{format!("Page {} of {}", p.current_page(), p.total_pages())}</p>
                </div>
                <div class="history-items">
                    {p.current_page_items()
                        .iter()
                        .cloned()
                        .map(|record| view! {
                            <HistoryItem record=record on_view=on_view on_delete=on_delete />
                        })
                        .collect::<Vec<_>>()}
                </div>
                {pagination}
            </div>
        }
        .into_any()
    }
}
