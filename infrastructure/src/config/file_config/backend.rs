//! Backend configuration from TOML (`[backend]` section)

use crate::backend::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, HttpBackendConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// OpenAI-compatible endpoint root (`…/chat/completions` is appended)
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key. Prefer `api_key_env`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub call_timeout_secs: u64,
    pub max_tokens: u32,
    pub synthesis_max_tokens: u32,
    pub retry: FileRetryConfig,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            call_timeout_secs: 60,
            max_tokens: 1500,
            synthesis_max_tokens: 4000,
            retry: FileRetryConfig::default(),
        }
    }
}

impl FileBackendConfig {
    pub fn http_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            api_key_env: self.api_key_env.clone(),
        }
    }
}

/// `[backend.retry]`; retries are off unless `max_attempts > 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub max_attempts: u32,
    pub backoff_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            backoff_ms: 500,
        }
    }
}

impl FileRetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.backoff_ms))
    }
}
