use leptos::prelude::*;

use crate::components::register_form::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="page auth-page">
            <RegisterForm />
        </div>
    }
}
