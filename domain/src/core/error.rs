//! Domain error types

use crate::persona::PersonaId;
use thiserror::Error;

/// Fatal, pre-session configuration problems.
///
/// These are the only failures a caller of the session orchestrator ever
/// sees: they are raised before any phase starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Missing backend credentials (set {env_var} or backend.api_key)")]
    MissingCredentials { env_var: String },

    #[error("Persona '{0}' has an empty model pool")]
    EmptyModelPool(PersonaId),

    #[error("Persona '{0}' is not configured")]
    MissingPersona(PersonaId),

    #[error("Persona '{persona}' has invalid temperature {value} (expected 0.0..=2.0)")]
    InvalidTemperature { persona: PersonaId, value: f32 },

    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Phase record out of order: expected {expected}, got {actual}")]
    PhaseOutOfOrder { expected: String, actual: String },

    #[error("Session already holds all phase records")]
    SessionComplete,

    #[error("Invalid stage transition from {from}: {reason}")]
    InvalidTransition { from: String, reason: &'static str },

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),
}
