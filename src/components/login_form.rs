use std::time::Duration;

use bioai_core::routes::{DASHBOARD_ROUTE, REGISTER_ROUTE};
use bioai_core::toast::ToastKind;
use bioai_core::validation::{FieldErrors, LoginForm as LoginFields};
use bioai_core::Navigator;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::error_message::ErrorMessage;
use crate::components::form_field::FormField;
use crate::state::use_app;

const REDIRECT_DELAY: Duration = Duration::from_millis(500);

#[component]
pub fn LoginForm() -> impl IntoView {
    let app = use_app();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let api_error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let edited = |field: &'static str| {
        Callback::new(move |_: ()| {
            errors.update(|e| e.clear(field));
            api_error.set(None);
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        api_error.set(None);

        let fields = LoginFields {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = fields.validate() {
            errors.set(e);
            return;
        }

        loading.set(true);
        let app = app.clone();
        spawn_local(async move {
            let result = app.gateway().login(&fields.email, &fields.password).await;
            // Unmounted while waiting
            if loading.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(_) => {
                    app.toast(ToastKind::Success, "Login successful! Redirecting...");
                    let navigator = app.navigator.clone();
                    set_timeout(move || navigator.navigate(DASHBOARD_ROUTE), REDIRECT_DELAY);
                }
                Err(e) => {
                    let message = e.to_string();
                    api_error.set(Some(message.clone()));
                    app.toast(ToastKind::Error, message);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit novalidate=true>
            <h2 class="auth-title">"Login to BioAI Analyzer"</h2>

            <ErrorMessage message=api_error />

            <FormField
                id="email"
                label="Email"
                input_type="email"
                placeholder="Enter your email"
                value=email
                error=Signal::derive(move || errors.with(|e| e.get("email")))
                disabled=loading
                on_edit=edited("email")
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                placeholder="Enter your password"
                value=password
                error=Signal::derive(move || errors.with(|e| e.get("password")))
                disabled=loading
                on_edit=edited("password")
            />

            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { "Logging in..." } else { "Login" }}
            </button>

            <p class="auth-switch">
                "Don't have an account? "
                <a href=REGISTER_ROUTE>"Register here"</a>
            </p>
        </form>
    }
}
