use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

/// Inline alert panel with an optional dismiss button.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] severity: Severity,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let (class, icon) = match severity {
        Severity::Error => ("alert alert-error", "\u{2716}"),
        Severity::Warning => ("alert alert-warning", "\u{26a0}"),
        Severity::Info => ("alert alert-info", "\u{2139}"),
    };

    move || {
        message.get().map(|text| {
            view! {
                <div class=class role="alert">
                    <span class="alert-icon">{icon}</span>
                    <p class="alert-message">{text}</p>
                    {on_dismiss.map(|cb| view! {
                        <button class="alert-dismiss" aria-label="Dismiss" on:click=move |_| cb.run(())>
                            "\u{2715}"
                        </button>
                    })}
                </div>
            }
        })
    }
}
