//! Orchestration parameters: phase budgets and call limits
//!
//! [`OrchestrationConfig`] groups the static parameters that control how
//! [`RunSessionUseCase`](crate::use_cases::run_session::RunSessionUseCase)
//! schedules phases. These are application-layer concerns, not domain policy.
//!
//! # Phase Budgets
//!
//! Each phase owns an independent wall-clock budget that starts when the
//! phase starts. There is no shared deadline across phases.
//!
//! | Phase | Selection | Default budget |
//! |-------|-----------|----------------|
//! | Foundation | fixed order | 180s |
//! | Expansion | random walk, capped | 120s |
//! | Refinement | fixed order | 180s |
//! | Synthesis | single reasoning call | 120s |

use ideaforge_domain::{ConfigurationError, PersonaId, Phase, PhaseSelection};
use std::time::Duration;

/// Wall-clock allowance for each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBudgets {
    pub foundation: Duration,
    pub expansion: Duration,
    pub refinement: Duration,
    pub synthesis: Duration,
}

impl PhaseBudgets {
    pub fn get(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Foundation => self.foundation,
            Phase::Expansion => self.expansion,
            Phase::Refinement => self.refinement,
            Phase::Synthesis => self.synthesis,
        }
    }
}

impl Default for PhaseBudgets {
    fn default() -> Self {
        Self {
            foundation: Duration::from_secs(180),
            expansion: Duration::from_secs(120),
            refinement: Duration::from_secs(180),
            synthesis: Duration::from_secs(120),
        }
    }
}

/// Session scheduling parameters.
#[derive(Debug, Clone)]
pub struct OrchestrationConfig {
    /// Per-call timeout, independent of phase deadlines.
    pub call_timeout: Duration,
    /// Output-token allowance for phases 1–3.
    pub max_tokens: u32,
    /// Output-token allowance for the synthesis call.
    pub synthesis_max_tokens: u32,
    pub budgets: PhaseBudgets,
    /// Hard cap on expansion iterations, whatever the budget.
    pub expansion_max_iterations: usize,
    /// Advisory session budget used only for the post-foundation early exit.
    pub session_budget: Option<Duration>,
    /// Fraction of `session_budget` that Phase 1 may consume before
    /// phases 2 and 3 are skipped.
    pub early_exit_fraction: f64,
    pub foundation_order: Vec<PersonaId>,
    pub refinement_order: Vec<PersonaId>,
    pub expansion_personas: Vec<PersonaId>,
    pub synthesis_persona: PersonaId,
}

impl Default for OrchestrationConfig {
    fn default() -> Self {
        let fixed_order = vec![PersonaId::Creative, PersonaId::Logical, PersonaId::Reasoning];
        Self {
            call_timeout: Duration::from_secs(60),
            max_tokens: 1500,
            synthesis_max_tokens: 4000,
            budgets: PhaseBudgets::default(),
            expansion_max_iterations: 12,
            session_budget: Some(Duration::from_secs(900)),
            early_exit_fraction: 0.6,
            foundation_order: fixed_order.clone(),
            refinement_order: fixed_order,
            expansion_personas: PersonaId::ALL.to_vec(),
            synthesis_persona: PersonaId::Reasoning,
        }
    }
}

impl OrchestrationConfig {
    // ==================== Builder Methods ====================

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_budgets(mut self, budgets: PhaseBudgets) -> Self {
        self.budgets = budgets;
        self
    }

    pub fn with_phase_budget(mut self, phase: Phase, budget: Duration) -> Self {
        match phase {
            Phase::Foundation => self.budgets.foundation = budget,
            Phase::Expansion => self.budgets.expansion = budget,
            Phase::Refinement => self.budgets.refinement = budget,
            Phase::Synthesis => self.budgets.synthesis = budget,
        }
        self
    }

    pub fn with_expansion_max_iterations(mut self, max: usize) -> Self {
        self.expansion_max_iterations = max;
        self
    }

    pub fn with_session_budget(mut self, budget: Option<Duration>) -> Self {
        self.session_budget = budget;
        self
    }

    pub fn with_early_exit_fraction(mut self, fraction: f64) -> Self {
        self.early_exit_fraction = fraction;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32, synthesis_max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self.synthesis_max_tokens = synthesis_max_tokens;
        self
    }

    // ==================== Derived Values ====================

    /// Persona selection policy for a phase
    pub fn selection_for(&self, phase: Phase) -> PhaseSelection {
        match phase {
            Phase::Foundation => PhaseSelection::FixedOrder(self.foundation_order.clone()),
            Phase::Expansion => PhaseSelection::RandomNoRepeat {
                personas: self.expansion_personas.clone(),
                max_iterations: self.expansion_max_iterations,
            },
            Phase::Refinement => PhaseSelection::FixedOrder(self.refinement_order.clone()),
            Phase::Synthesis => PhaseSelection::Single(self.synthesis_persona),
        }
    }

    pub fn max_tokens_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Synthesis => self.synthesis_max_tokens,
            _ => self.max_tokens,
        }
    }

    /// Whether Phase 1's elapsed time warrants skipping phases 2 and 3.
    pub fn should_exit_early(&self, elapsed: Duration) -> bool {
        match self.session_budget {
            Some(budget) => {
                elapsed.as_secs_f64() >= budget.as_secs_f64() * self.early_exit_fraction
            }
            None => false,
        }
    }

    // ==================== Validation ====================

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.call_timeout.is_zero() {
            return Err(ConfigurationError::InvalidBudget(
                "call timeout cannot be 0".to_string(),
            ));
        }
        if self.max_tokens == 0 || self.synthesis_max_tokens == 0 {
            return Err(ConfigurationError::Invalid(
                "max_tokens cannot be 0".to_string(),
            ));
        }
        if self.foundation_order.is_empty() || self.refinement_order.is_empty() {
            return Err(ConfigurationError::Invalid(
                "fixed-order phases need at least one persona".to_string(),
            ));
        }
        if self.expansion_personas.is_empty() {
            return Err(ConfigurationError::Invalid(
                "expansion needs at least one persona".to_string(),
            ));
        }
        if !(self.early_exit_fraction > 0.0 && self.early_exit_fraction <= 1.0) {
            return Err(ConfigurationError::InvalidBudget(format!(
                "early_exit_fraction must be in (0, 1], got {}",
                self.early_exit_fraction
            )));
        }
        Ok(())
    }
}
