use bioai_core::routes::{ABOUT_ROUTE, DASHBOARD_ROUTE, HISTORY_ROUTE, LOGIN_ROUTE};
use bioai_core::Navigator;
use leptos::prelude::*;

use crate::state::use_app;

#[component]
pub fn Navbar() -> impl IntoView {
    let app = use_app();
    let session = app.session;
    let (menu_open, set_menu_open) = signal(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        app.logout();
        set_menu_open.set(false);
        app.navigator.navigate(LOGIN_ROUTE);
    };

    let user_label = move || {
        session
            .get()
            .user
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"BioAI Analyzer"</a>

            <Show when=move || session.get().is_authenticated()>
                <button
                    class="navbar-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
                <div class="navbar-links" class:navbar-links-open=move || menu_open.get()>
                    <a href=DASHBOARD_ROUTE class="nav-link" on:click=move |_| set_menu_open.set(false)>"Dashboard"</a>
                    <a href=HISTORY_ROUTE class="nav-link" on:click=move |_| set_menu_open.set(false)>"History"</a>
                    <a href=ABOUT_ROUTE class="nav-link" on:click=move |_| set_menu_open.set(false)>"About"</a>
                    <div class="navbar-user">
                        <span class="navbar-user-name">{user_label}</span>
                        <button class="btn btn-primary btn-small" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
