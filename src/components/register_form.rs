use std::time::Duration;

use bioai_core::routes::LOGIN_ROUTE;
use bioai_core::toast::ToastKind;
use bioai_core::validation::{FieldErrors, RegisterForm as RegisterFields};
use bioai_core::Navigator;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::error_message::ErrorMessage;
use crate::components::form_field::FormField;
use crate::state::use_app;

const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[component]
pub fn RegisterForm() -> impl IntoView {
    let app = use_app();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let api_error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let edited = |field: &'static str| {
        Callback::new(move |_: ()| {
            errors.update(|e| e.clear(field));
            api_error.set(None);
        })
    };
    let error_for = |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        api_error.set(None);

        let fields = RegisterFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(e) = fields.validate() {
            errors.set(e);
            return;
        }

        loading.set(true);
        let app = app.clone();
        spawn_local(async move {
            let result = app
                .gateway()
                .register(&fields.name, &fields.email, &fields.password)
                .await;
            match result {
                Ok(_) => {
                    // The form stays disabled until the redirect fires
                    app.toast(ToastKind::Success, "Registration successful! Redirecting to login...");
                    let navigator = app.navigator.clone();
                    set_timeout(move || navigator.navigate(LOGIN_ROUTE), REDIRECT_DELAY);
                }
                Err(e) => {
                    if loading.try_set(false).is_some() {
                        return;
                    }
                    let message = e.to_string();
                    api_error.set(Some(message.clone()));
                    app.toast(ToastKind::Error, message);
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit novalidate=true>
            <h2 class="auth-title">"Create an Account"</h2>

            <ErrorMessage message=api_error />

            <FormField
                id="name"
                label="Name"
                input_type="text"
                placeholder="Enter your name"
                value=name
                error=error_for("name")
                disabled=loading
                on_edit=edited("name")
            />
            <FormField
                id="email"
                label="Email"
                input_type="email"
                placeholder="Enter your email"
                value=email
                error=error_for("email")
                disabled=loading
                on_edit=edited("email")
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                placeholder="Enter your password (min 8 characters)"
                value=password
                error=error_for("password")
                disabled=loading
                on_edit=edited("password")
            />
            <FormField
                id="confirm_password"
                label="Confirm Password"
                input_type="password"
                placeholder="Confirm your password"
                value=confirm_password
                error=error_for("confirm_password")
                disabled=loading
                on_edit=edited("confirm_password")
            />

            <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                {move || if loading.get() { "Registering..." } else { "Register" }}
            </button>

            <p class="auth-switch">
                "Already have an account? "
                <a href=LOGIN_ROUTE>"Login here"</a>
            </p>
        </form>
    }
}
