use leptos::prelude::*;

use crate::state::use_app;

/// Stack of active toasts, newest last. Each can be dismissed early.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_app().toasts;

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_class()) role="status">
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Close notification"
                                on:click=move |_| toasts.update(|q| q.remove(id))
                            >
                                "\u{2715}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
