//! Platform-neutral client logic for BioAI Analyzer: session, backend
//! gateway, history paging, validation and view helpers.

pub mod charts;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod models;
pub mod routes;
pub mod session;
pub mod toast;
pub mod validation;

pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, StorageError, TransportError, ValidationError};
pub use gateway::{Gateway, Navigator, ReqwestTransport, Transport};
pub use history::HistoryPager;
pub use models::{AnalysisResult, HistoryRecord, SequenceType, UploadFile, User};
pub use session::{KeyValueStore, MemoryStore, Session, SessionStore};
pub use toast::{Toast, ToastKind, ToastQueue};
