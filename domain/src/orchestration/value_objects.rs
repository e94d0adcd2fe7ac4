//! Orchestration value objects - immutable result types for ideation sessions.
//!
//! - [`AgentCallResult`] - One persona invocation, successful or replaced by fallback
//! - [`OpenPhase`] - A phase being executed; accepts results until sealed
//! - [`PhaseRecord`] - A sealed phase; immutable
//! - [`SessionOutcome`] - Final artifact plus the per-phase breakdown

use super::entities::{Phase, SessionStage};
use crate::persona::PersonaId;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a single backend call made on behalf of a persona
///
/// `content` is never empty: failed calls carry locally generated
/// fallback text and `succeeded == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCallResult {
    pub persona: PersonaId,
    /// Display name configured for the persona when the call was made
    #[serde(default)]
    pub persona_name: String,
    pub phase: Phase,
    pub content: String,
    /// Model identifier the call was routed to (empty when no call was issued)
    pub model_used: String,
    pub duration_ms: u64,
    pub succeeded: bool,
    /// Why the fallback was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Served from the response cache instead of the backend
    #[serde(default)]
    pub cached: bool,
}

impl AgentCallResult {
    /// Creates a successful result.
    ///
    /// # Arguments
    /// * `content` - Cleaned backend output; must not be blank
    pub fn success(
        persona: PersonaId,
        phase: Phase,
        content: impl Into<String>,
        model_used: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        let content = content.into();
        debug_assert!(!content.trim().is_empty(), "successful result with empty content");
        Self {
            persona,
            persona_name: persona.default_display_name().to_string(),
            phase,
            content,
            model_used: model_used.into(),
            duration_ms,
            succeeded: true,
            error: None,
            cached: false,
        }
    }

    /// Creates a failed result carrying locally generated fallback content.
    pub fn fallback(
        persona: PersonaId,
        phase: Phase,
        fallback_content: impl Into<String>,
        model_used: impl Into<String>,
        duration_ms: u64,
        error: impl Into<String>,
    ) -> Self {
        Self {
            persona,
            persona_name: persona.default_display_name().to_string(),
            phase,
            content: fallback_content.into(),
            model_used: model_used.into(),
            duration_ms,
            succeeded: false,
            error: Some(error.into()),
            cached: false,
        }
    }

    pub fn with_persona_name(mut self, name: impl Into<String>) -> Self {
        self.persona_name = name.into();
        self
    }

    /// Configured display name, or the persona's default when none was recorded
    pub fn display_name(&self) -> &str {
        if self.persona_name.is_empty() {
            self.persona.default_display_name()
        } else {
            &self.persona_name
        }
    }

    pub fn from_cache(mut self) -> Self {
        self.cached = true;
        self
    }
}

/// A phase in progress.
///
/// Results are appended in invocation order. [`OpenPhase::seal`] consumes
/// the phase and yields an immutable [`PhaseRecord`].
#[derive(Debug)]
pub struct OpenPhase {
    phase: Phase,
    started_at: DateTime<Utc>,
    deadline: DateTime<Utc>,
    results: Vec<AgentCallResult>,
}

impl OpenPhase {
    /// Open a phase now with the given wall-clock allowance.
    pub fn start(phase: Phase, budget: Duration) -> Self {
        let started_at = Utc::now();
        let deadline = TimeDelta::from_std(budget)
            .ok()
            .and_then(|delta| started_at.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            phase,
            started_at,
            deadline,
            results: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn push(&mut self, result: AgentCallResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[AgentCallResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn seal(self) -> PhaseRecord {
        PhaseRecord {
            phase: self.phase,
            started_at: self.started_at,
            deadline: self.deadline,
            sealed_at: Utc::now(),
            results: self.results,
            skipped: false,
        }
    }
}

/// Sealed record of one phase (immutable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    phase: Phase,
    started_at: DateTime<Utc>,
    deadline: DateTime<Utc>,
    sealed_at: DateTime<Utc>,
    results: Vec<AgentCallResult>,
    /// The orchestrator skipped this phase (session early exit)
    #[serde(default)]
    skipped: bool,
}

impl PhaseRecord {
    /// An empty, sealed record for a phase the orchestrator chose not to run.
    pub fn skipped(phase: Phase) -> Self {
        let now = Utc::now();
        Self {
            phase,
            started_at: now,
            deadline: now,
            sealed_at: now,
            results: Vec::new(),
            skipped: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn sealed_at(&self) -> DateTime<Utc> {
        self.sealed_at
    }

    pub fn results(&self) -> &[AgentCallResult] {
        &self.results
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn fallback_count(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded).count()
    }

    /// Wall-clock time between opening and sealing
    pub fn elapsed(&self) -> Duration {
        (self.sealed_at - self.started_at).to_std().unwrap_or_default()
    }
}

/// Complete result of an ideation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// The original request
    pub prompt: String,
    /// Final artifact: one text blob organized into named sections
    pub content: String,
    /// One sealed record per phase, in phase order
    pub phases: Vec<PhaseRecord>,
    pub final_stage: SessionStage,
    /// Phases 2 and 3 were skipped because Phase 1 used most of the session budget
    pub early_exit: bool,
    pub duration_ms: u64,
}

impl SessionOutcome {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseRecord> {
        self.phases.iter().find(|r| r.phase() == phase)
    }

    /// The synthesis call's own output (backend text or fallback report)
    pub fn synthesis(&self) -> Option<&AgentCallResult> {
        self.phase(Phase::Synthesis)
            .and_then(|record| record.results().first())
    }

    pub fn total_calls(&self) -> usize {
        self.phases.iter().map(|r| r.results().len()).sum()
    }

    pub fn fallback_count(&self) -> usize {
        self.phases.iter().map(PhaseRecord::fallback_count).sum()
    }
}
