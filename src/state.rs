use std::sync::Arc;

use bioai_core::session::{Session, SessionStore};
use bioai_core::toast::{ToastKind, ToastQueue};
use bioai_core::{ClientConfig, Gateway, ReqwestTransport};
use leptos::prelude::*;
use tracing::info;

use crate::browser::{LocalStorage, RouterNavigator};

/// Shared application state provided at the root of the component tree.
#[derive(Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub store: SessionStore,
    /// Reactive mirror of `store`, updated through its change listener.
    pub session: RwSignal<Session>,
    pub navigator: Arc<RouterNavigator>,
    pub toasts: RwSignal<ToastQueue>,
}

impl AppContext {
    /// Restore any persisted session and wire the store to the reactive mirror.
    pub fn new(config: ClientConfig) -> Self {
        let store = SessionStore::new(Arc::new(LocalStorage));
        let session = RwSignal::new(store.load());
        store.subscribe(move |s| {
            session.try_set(s.clone());
        });

        info!("Using backend at {}", config.api_base_url);
        Self {
            config,
            store,
            session,
            navigator: Arc::new(RouterNavigator::default()),
            toasts: RwSignal::new(ToastQueue::new()),
        }
    }

    pub fn gateway(&self) -> Gateway<ReqwestTransport> {
        Gateway::new(
            ReqwestTransport::new(&self.config.api_base_url),
            self.store.clone(),
            self.navigator.clone(),
        )
    }

    /// Queue a toast and schedule its removal after the kind's default duration.
    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let toasts = self.toasts;
        let Some(id) = toasts.try_update(|q| q.push(kind, message)) else {
            return;
        };
        set_timeout(
            move || {
                toasts.try_update(|q| q.remove(id));
            },
            kind.default_duration(),
        );
    }

    pub fn logout(&self) {
        self.store.clear();
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
