//! Generative backend port
//!
//! Defines the interface for issuing one text-generation request on behalf
//! of a persona.

use async_trait::async_trait;
use ideaforge_domain::{ConfigurationError, PersonaId};
use std::time::Duration;
use thiserror::Error;

/// Errors a single backend call can produce.
///
/// Always recoverable from the orchestrator's point of view: the phase
/// executor converts them into fallback content.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Backend returned empty content")]
    EmptyContent,
}

impl BackendError {
    /// Whether a retry could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Timeout(_) | BackendError::Transport(_) => true,
            BackendError::Api { status, .. } => *status == 429 || *status >= 500,
            BackendError::MalformedResponse(_) | BackendError::EmptyContent => false,
        }
    }
}

/// One generation request
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub persona: PersonaId,
    /// Concrete model identifier picked from the persona's pool
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-call timeout, independent of any phase deadline
    pub timeout: Duration,
}

/// Text generation service.
///
/// Implementations (adapters) live in the infrastructure layer. They are
/// stateless per call, never retry internally and never fabricate content:
/// a successful result is non-empty, cleaned text.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Check that the backend can be used at all (credentials, endpoint).
    ///
    /// Called once before a session starts any phase.
    fn validate(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }

    async fn invoke(&self, request: &BackendRequest) -> Result<String, BackendError>;
}
