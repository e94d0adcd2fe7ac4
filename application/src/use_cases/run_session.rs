//! Run Session use case
//!
//! Orchestrates the full ideation flow: Foundation, Expansion, Refinement
//! and Synthesis, strictly in that order. Each phase sees every sealed
//! record before it.

use crate::config::OrchestrationConfig;
use crate::ports::backend::GenerativeBackend;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::response_cache::ResponseCache;
use crate::use_cases::execute_phase::PhaseExecutor;
use ideaforge_domain::{
    ConfigurationError, ConversationTurn, DomainError, PersonaRegistry, Phase, PhaseRecord,
    RandomSource, ReportComposer, SessionOutcome, SessionStage, SessionState,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{info, warn};

/// Errors that abort a session before any phase runs
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the RunSession use case
#[derive(Debug, Clone)]
pub struct RunSessionInput {
    /// The user's request
    pub prompt: String,
    /// Prior conversation turns, oldest first
    pub conversation_context: Vec<ConversationTurn>,
}

impl RunSessionInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            conversation_context: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: Vec<ConversationTurn>) -> Self {
        self.conversation_context = context;
        self
    }
}

/// Use case for running an ideation session
///
/// Holds no per-session state, so one instance can serve any number of
/// concurrent sessions.
pub struct RunSessionUseCase<B: GenerativeBackend + 'static> {
    backend: Arc<B>,
    executor: PhaseExecutor<B>,
    logger: Arc<dyn ConversationLogger>,
}

impl<B: GenerativeBackend + 'static> RunSessionUseCase<B> {
    pub fn new(
        backend: Arc<B>,
        registry: Arc<PersonaRegistry>,
        random: Arc<dyn RandomSource>,
        config: OrchestrationConfig,
    ) -> Self {
        Self {
            executor: PhaseExecutor::new(Arc::clone(&backend), registry, random, config),
            backend,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.executor = self.executor.with_cache(cache);
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.executor = self.executor.with_conversation_logger(Arc::clone(&logger));
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &OrchestrationConfig {
        self.executor.config()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunSessionInput) -> Result<SessionOutcome, RunSessionError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Fails only on preflight problems. Once the first phase starts, the
    /// session always reaches `Done` with a non-empty artifact.
    pub async fn execute_with_progress(
        &self,
        input: RunSessionInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<SessionOutcome, RunSessionError> {
        let mut stage = SessionStage::Init;
        if let Err(e) = self.preflight(&input) {
            stage = stage.fail()?;
            warn!(stage = stage.as_str(), "Session rejected: {}", e);
            return Err(e);
        }

        let started = Instant::now();
        let mut state = SessionState::new(input.prompt, input.conversation_context);
        let mut early_exit = false;

        info!(
            context_turns = state.conversation_context().len(),
            "Starting ideation session"
        );

        stage = stage.advance();
        while let Some(phase) = stage.phase() {
            let record = if early_exit && phase != Phase::Synthesis {
                PhaseRecord::skipped(phase)
            } else {
                self.executor.run(phase, &state, progress).await
            };
            state.append(record)?;

            if phase == Phase::Foundation {
                let elapsed = started.elapsed();
                if self.config().should_exit_early(elapsed) {
                    warn!(
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Foundation used most of the session budget, skipping to synthesis"
                    );
                    self.logger.log(ConversationEvent::new(
                        events::SESSION_EARLY_EXIT,
                        json!({ "elapsed_ms": elapsed.as_millis() as u64 }),
                    ));
                    progress.on_early_exit(elapsed);
                    early_exit = true;
                }
            }

            stage = stage.advance();
        }

        let content = ReportComposer::compose(&state);
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let prompt = state.original_prompt().to_string();
        let outcome = SessionOutcome {
            prompt,
            content,
            phases: state.into_records(),
            final_stage: stage,
            early_exit,
            duration_ms,
        };

        info!(
            calls = outcome.total_calls(),
            fallbacks = outcome.fallback_count(),
            duration_ms,
            "Session complete"
        );
        self.logger.log(ConversationEvent::new(
            events::SESSION_COMPLETE,
            json!({
                "calls": outcome.total_calls(),
                "fallbacks": outcome.fallback_count(),
                "early_exit": early_exit,
                "duration_ms": duration_ms,
            }),
        ));

        Ok(outcome)
    }

    fn preflight(&self, input: &RunSessionInput) -> Result<(), RunSessionError> {
        if input.prompt.trim().is_empty() {
            return Err(RunSessionError::EmptyPrompt);
        }
        self.config().validate()?;
        self.backend.validate()?;
        Ok(())
    }
}
