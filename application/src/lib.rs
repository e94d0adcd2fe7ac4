//! Application layer for ideaforge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{OrchestrationConfig, PhaseBudgets};
pub use ports::{
    backend::{BackendError, BackendRequest, GenerativeBackend},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoProgress, ProgressNotifier},
    response_cache::{CacheKey, CachedResponse, NoCache, ResponseCache},
};
pub use use_cases::execute_phase::PhaseExecutor;
pub use use_cases::run_session::{RunSessionError, RunSessionInput, RunSessionUseCase};
