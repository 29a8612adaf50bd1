#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use bioai_core::error::TransportError;
use bioai_core::gateway::{ApiRequest, Gateway, Navigator, RawResponse, Transport};
use bioai_core::session::{MemoryStore, SessionStore};

/// Replays canned responses in order and records every request it was given.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

/// Records navigations and pretends the browser is on `path`.
#[derive(Default)]
pub struct RecordingNavigator {
    path: Mutex<String>,
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Arc<Self> {
        Arc::new(Self {
            path: Mutex::new(path.to_string()),
            visited: Mutex::new(Vec::new()),
        })
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }

    fn navigate(&self, path: &str) {
        *self.path.lock().unwrap() = path.to_string();
        self.visited.lock().unwrap().push(path.to_string());
    }
}

pub struct Harness {
    pub gateway: Gateway<ScriptedTransport>,
    pub transport: ScriptedTransport,
    pub storage: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Gateway over `transport` with storage seeded from `entries`, on route `path`.
pub fn harness(transport: ScriptedTransport, entries: &[(&str, &str)], path: &str) -> Harness {
    let storage = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
    let session = SessionStore::new(storage.clone());
    session.load();
    let navigator = RecordingNavigator::at(path);
    let gateway = Gateway::new(transport.clone(), session, navigator.clone());
    Harness {
        gateway,
        transport,
        storage,
        navigator,
    }
}

pub const STORED_USER: &str = r#"{"id":1,"name":"A"}"#;

pub fn logged_in() -> Vec<(&'static str, &'static str)> {
    vec![("token", "T"), ("user", STORED_USER)]
}
