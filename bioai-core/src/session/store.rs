use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use super::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use super::types::Session;
use crate::models::User;

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<Session>,
    listeners: RwLock<Vec<Listener>>,
}

/// Owner of the current session. Cloning yields another handle to the same state.
///
/// Durable storage only mirrors the in-memory value: reads after `load` come
/// from memory, and a failed storage write never rolls the session back.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Create an anonymous store over `storage`. Call [`load`](Self::load) to restore.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                state: RwLock::new(Session::default()),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Restore a persisted session. A missing token, missing user or a user
    /// record that fails to parse all leave the session anonymous.
    pub fn load(&self) -> Session {
        let token = self.read_key(TOKEN_KEY);
        let user = self.read_key(USER_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .map_err(|e| warn!("Discarding malformed stored user: {}", e))
                .ok()
        });

        let session = match (token, user) {
            (Some(token), Some(user)) => {
                info!("Restored session for user {}", user.id);
                Session::authenticated(token, user)
            }
            _ => Session::default(),
        };
        self.replace(session.clone());
        session
    }

    /// Persist `token` and `user` and mark the session authenticated.
    pub fn establish(&self, token: impl Into<String>, user: User) -> Session {
        let token = token.into();
        if let Err(e) = self.inner.storage.set(TOKEN_KEY, &token) {
            warn!("Failed to persist token: {}", e);
        }
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.inner.storage.set(USER_KEY, &json) {
                    warn!("Failed to persist user: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize user: {}", e),
        }

        info!("Session established for user {}", user.id);
        let session = Session::authenticated(token, user);
        self.replace(session.clone());
        session
    }

    /// Forget the session in memory and in storage. Safe to call repeatedly.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.inner.storage.remove(key) {
                warn!("Failed to remove '{}' from storage: {}", key, e);
            }
        }
        if self.current().is_authenticated() {
            info!("Session cleared");
        }
        self.replace(Session::default());
    }

    pub fn current(&self) -> Session {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Register a callback run with every new session value.
    pub fn subscribe(&self, listener: impl Fn(&Session) + Send + Sync + 'static) {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.inner.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                warn!("Failed to read '{}' from storage: {}", key, e);
                None
            }
        }
    }

    fn replace(&self, session: Session) {
        *self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = session.clone();

        // Snapshot so a listener may call back into the store.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener(&session);
        }
    }
}
