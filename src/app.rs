use bioai_core::routes::{DASHBOARD_ROUTE, LOGIN_ROUTE};
use bioai_core::ClientConfig;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast_container::ToastContainer;
use crate::pages::about::AboutPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::history::HistoryPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::{use_app, AppContext};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(ClientConfig::from_env()));

    view! {
        <Router>
            <RedirectWatcher />
            <div class="app-layout">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <Redirect path=DASHBOARD_ROUTE /> }>
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
                        />
                        <Route
                            path=path!("/history")
                            view=|| view! { <RequireAuth><HistoryPage /></RequireAuth> }
                        />
                        <Route path=path!("/") view=|| view! { <Redirect path=DASHBOARD_ROUTE /> } />
                    </Routes>
                </main>
                <Footer />
            </div>
            <ToastContainer />
        </Router>
    }
}

/// Performs redirects requested outside the router, such as the gateway's 401 handling.
#[component]
fn RedirectWatcher() -> impl IntoView {
    let pending = use_app().navigator.pending();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, Default::default());
        }
    });
}

/// Renders `children` only with an authenticated session; otherwise sends the
/// user to the login view.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_app().session;

    move || {
        if session.get().is_authenticated() {
            children().into_any()
        } else {
            view! { <Redirect path=LOGIN_ROUTE /> }.into_any()
        }
    }
}
