use tracing::warn;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_HISTORY_PAGE_SIZE: usize = 20;
/// 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".fasta", ".fa", ".gb", ".gbk"];

/// Client-wide settings. Built once at startup and handed to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub history_page_size: usize,
    pub max_upload_bytes: u64,
    pub accepted_extensions: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            history_page_size: DEFAULT_HISTORY_PAGE_SIZE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ClientConfig {
    /// Build from the `BIOAI_API_URL` value baked in at compile time.
    /// An invalid override is logged and the default address is used instead.
    pub fn from_env() -> Self {
        let config = Self::default();
        match option_env!("BIOAI_API_URL") {
            Some(url) if !url.trim().is_empty() => match config.clone().with_base_url(url) {
                Ok(c) => c,
                Err(e) => {
                    warn!("Ignoring BIOAI_API_URL override: {}", e);
                    config
                }
            },
            _ => config,
        }
    }

    /// Replace the backend address. Trailing slashes are dropped so paths can be appended.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        let trimmed = url.trim();
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: trimmed.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        self.api_base_url = trimmed.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The `accept` attribute value for file inputs.
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.history_page_size, 20);
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert_eq!(config.accept_attribute(), ".fasta,.fa,.gb,.gbk");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("https://api.example.org/v1/")
            .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.org/v1");
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        assert!(ClientConfig::default().with_base_url("not a url").is_err());
        assert!(ClientConfig::default().with_base_url("ftp://example.org").is_err());
    }
}
