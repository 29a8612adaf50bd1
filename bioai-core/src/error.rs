use thiserror::Error;

/// Shown whenever a request never got a response.
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to server. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unreachable | ApiError::Decode(_) | ApiError::Encode(_) => None,
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Server { status, .. } => Some(*status),
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}

/// Failure reported by a transport before any HTTP status was received.
#[derive(Debug, Error)]
#[error("Transport error: {0}")]
pub struct TransportError(pub String);

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write failed for '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// A field-level problem found before submission. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}
