use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[component]
pub fn LoadingSpinner(
    #[prop(optional)] size: SpinnerSize,
    /// Caption under the spinner.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let class = match size {
        SpinnerSize::Small => "spinner spinner-sm",
        SpinnerSize::Medium => "spinner spinner-md",
        SpinnerSize::Large => "spinner spinner-lg",
    };

    view! {
        <div class="loading-indicator">
            <div class=class role="status" aria-label="Loading"></div>
            {label.map(|text| view! { <p class="loading-label">{text}</p> })}
        </div>
    }
}
