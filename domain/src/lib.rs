//! Domain layer for ideaforge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Personas
//!
//! Three calling profiles (creative, reasoning, logical), each with a fixed
//! sampling temperature and a pool of acceptable backend models.
//!
//! ## Phases
//!
//! A session runs four phases in order: Foundation (fixed order),
//! Expansion (time-boxed random walk), Refinement (fixed order) and
//! Synthesis (single call). Every phase seals exactly one [`PhaseRecord`].

pub mod config;
pub mod core;
pub mod orchestration;
pub mod persona;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::{ConfigurationError, DomainError};
pub use orchestration::{
    entities::{Phase, PhaseSelection, SessionStage},
    report::ReportComposer,
    session::{ConversationTurn, Role, SessionState},
    value_objects::{AgentCallResult, OpenPhase, PhaseRecord, SessionOutcome},
};
pub use persona::{Persona, PersonaId, PersonaRegistry, RandomSource, select_next_persona};
pub use prompt::{FallbackTemplate, IdeationPrompt};
