//! OpenAI-compatible chat completions backend.
//!
//! Works with any endpoint that speaks `POST {base_url}/chat/completions`
//! (OpenRouter by default). One request per call, no streaming, no retries.

use super::reasoning::strip_reasoning_trace;
use async_trait::async_trait;
use ideaforge_application::ports::backend::{BackendError, BackendRequest, GenerativeBackend};
use ideaforge_domain::ConfigurationError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

const APP_NAME: &str = "ideaforge";

/// Sanitize API error messages
fn sanitize_api_error(error: &str) -> String {
    let lower = error.to_lowercase();

    if lower.contains("api key")
        || lower.contains("apikey")
        || lower.contains("invalid key")
        || lower.contains("unauthorized")
        || lower.contains("authentication")
    {
        return "API authentication error. Please check your API key configuration.".to_string();
    }

    if lower.contains("rate limit") || lower.contains("quota") {
        return "API rate limit exceeded. Please try again later.".to_string();
    }

    if error.len() < 200 {
        return error.to_string();
    }

    "An API error occurred.".to_string()
}

/// Mask API key for safe display
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}

/// Connection settings for [`HttpBackend`]
#[derive(Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    /// Inline key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    /// Environment variable holding the key
    pub api_key_env: String,
}

impl fmt::Debug for HttpBackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBackendConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("api_key_env", &self.api_key_env)
            .finish()
    }
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl HttpBackendConfig {
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_api_key_env(mut self, env_var: impl Into<String>) -> Self {
        self.api_key_env = env_var.into();
        self
    }

    /// Inline key if set, otherwise the environment variable. Blank values
    /// count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        let present = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(present)
            .or_else(|| std::env::var(&self.api_key_env).ok().filter(present))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP generative backend
pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
    api_key: Option<String>,
}

impl HttpBackend {
    /// Build the backend. The key is resolved once here; a missing key is
    /// reported by [`GenerativeBackend::validate`].
    pub fn new(config: HttpBackendConfig) -> Result<Self, ConfigurationError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ConfigurationError::Invalid(format!("HTTP client: {}", e)))?;
        let api_key = config.resolve_api_key();
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl GenerativeBackend for HttpBackend {
    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.api_key.is_none() {
            return Err(ConfigurationError::MissingCredentials {
                env_var: self.config.api_key_env.clone(),
            });
        }
        Ok(())
    }

    async fn invoke(&self, request: &BackendRequest) -> Result<String, BackendError> {
        let body = ChatRequest {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut builder = self
            .client
            .post(self.endpoint())
            .timeout(request.timeout)
            .header("X-Title", APP_NAME)
            .json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        debug!(model = %request.model, "Sending chat completion request");

        let map_transport = |e: reqwest::Error| {
            if e.is_timeout() {
                BackendError::Timeout(request.timeout)
            } else {
                BackendError::Transport(e.to_string())
            }
        };

        let response = builder.send().await.map_err(map_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: sanitize_api_error(&message),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::MalformedResponse("No choices in response".to_string()))?;

        let content = strip_reasoning_trace(choice.message.content.as_deref().unwrap_or_default());
        if content.is_empty() {
            return Err(BackendError::EmptyContent);
        }
        Ok(content)
    }
}
