use bioai_core::SequenceType;
use leptos::prelude::*;

#[component]
pub fn SequenceTabs(
    #[prop(into)] active: Signal<SequenceType>,
    on_change: Callback<SequenceType>,
) -> impl IntoView {
    view! {
        <div class="sequence-tabs" role="tablist">
            {SequenceType::ALL
                .into_iter()
                .map(|ty| {
                    view! {
                        <button
                            class="tab"
                            class:tab-active=move || active.get() == ty
                            role="tab"
                            aria-selected=move || (active.get() == ty).to_string()
                            on:click=move |_| on_change.run(ty)
                        >
                            {ty.as_str()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
