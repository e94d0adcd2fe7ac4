//! Orchestration domain entities

use crate::core::error::DomainError;
use crate::persona::PersonaId;
use serde::{Deserialize, Serialize};

/// Phase of an ideation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Fixed-order pass that lays down the first concepts
    Foundation,
    /// Time-boxed random walk over all personas
    Expansion,
    /// Second fixed-order pass over everything so far
    Refinement,
    /// Single reasoning call that produces the final report
    Synthesis,
}

impl Phase {
    /// All phases in execution order
    pub const ALL: [Phase; 4] = [
        Phase::Foundation,
        Phase::Expansion,
        Phase::Refinement,
        Phase::Synthesis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Foundation => "foundation",
            Phase::Expansion => "expansion",
            Phase::Refinement => "refinement",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::Expansion => "Expansion",
            Phase::Refinement => "Refinement",
            Phase::Synthesis => "Synthesis",
        }
    }

    /// 1-based position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            Phase::Foundation => 1,
            Phase::Expansion => 2,
            Phase::Refinement => 3,
            Phase::Synthesis => 4,
        }
    }

    /// Markdown section header used in the final artifact
    pub fn section_header(&self) -> String {
        format!("## Phase {}: {}", self.number(), self.display_name())
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Session state machine
///
/// `Init → Foundation → Expansion → Refinement → Synthesis → Done`.
/// `Failed` is reachable only from `Init`: once a phase has started the
/// session always runs to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStage {
    Init,
    Foundation,
    Expansion,
    Refinement,
    Synthesis,
    Done,
    Failed,
}

impl SessionStage {
    /// Next stage on the happy path. Terminal stages stay put.
    pub fn advance(self) -> SessionStage {
        match self {
            SessionStage::Init => SessionStage::Foundation,
            SessionStage::Foundation => SessionStage::Expansion,
            SessionStage::Expansion => SessionStage::Refinement,
            SessionStage::Refinement => SessionStage::Synthesis,
            SessionStage::Synthesis => SessionStage::Done,
            SessionStage::Done => SessionStage::Done,
            SessionStage::Failed => SessionStage::Failed,
        }
    }

    /// Move to `Failed`. Only legal before any phase has started.
    pub fn fail(self) -> Result<SessionStage, DomainError> {
        match self {
            SessionStage::Init => Ok(SessionStage::Failed),
            other => Err(DomainError::InvalidTransition {
                from: other.as_str().to_string(),
                reason: "sessions cannot fail once a phase has started",
            }),
        }
    }

    /// Phase executed while in this stage, if any
    pub fn phase(&self) -> Option<Phase> {
        match self {
            SessionStage::Foundation => Some(Phase::Foundation),
            SessionStage::Expansion => Some(Phase::Expansion),
            SessionStage::Refinement => Some(Phase::Refinement),
            SessionStage::Synthesis => Some(Phase::Synthesis),
            SessionStage::Init | SessionStage::Done | SessionStage::Failed => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStage::Init => "init",
            SessionStage::Foundation => "phase1_foundation",
            SessionStage::Expansion => "phase2_expansion",
            SessionStage::Refinement => "phase3_refinement",
            SessionStage::Synthesis => "phase4_synthesis",
            SessionStage::Done => "done",
            SessionStage::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SessionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a phase chooses which personas to invoke
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseSelection {
    /// Invoke each persona once, strictly in the given order
    FixedOrder(Vec<PersonaId>),
    /// Serial random walk, never repeating the previous persona when at
    /// least two are eligible, bounded by a hard iteration cap
    RandomNoRepeat {
        personas: Vec<PersonaId>,
        max_iterations: usize,
    },
    /// A single call
    Single(PersonaId),
}

impl PhaseSelection {
    /// Number of calls planned up front, if known
    pub fn planned_calls(&self) -> Option<usize> {
        match self {
            PhaseSelection::FixedOrder(order) => Some(order.len()),
            PhaseSelection::RandomNoRepeat { .. } => None,
            PhaseSelection::Single(_) => Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_happy_path_visits_every_phase() {
        let mut stage = SessionStage::Init.advance();
        let mut phases = Vec::new();
        while let Some(phase) = stage.phase() {
            phases.push(phase);
            stage = stage.advance();
        }
        assert_eq!(phases, Phase::ALL.to_vec());
        assert_eq!(stage, SessionStage::Done);
    }

    #[test]
    fn test_fail_only_from_init() {
        assert_eq!(SessionStage::Init.fail().unwrap(), SessionStage::Failed);
        assert!(SessionStage::Foundation.fail().is_err());
        assert!(SessionStage::Synthesis.fail().is_err());
    }

    #[test]
    fn test_terminal_stages_stay_put() {
        assert_eq!(SessionStage::Done.advance(), SessionStage::Done);
        assert_eq!(SessionStage::Failed.advance(), SessionStage::Failed);
    }

    #[test]
    fn test_section_headers() {
        assert_eq!(Phase::Foundation.section_header(), "## Phase 1: Foundation");
        assert_eq!(Phase::Synthesis.section_header(), "## Phase 4: Synthesis");
    }

    #[test]
    fn test_planned_calls() {
        let fixed = PhaseSelection::FixedOrder(PersonaId::ALL.to_vec());
        assert_eq!(fixed.planned_calls(), Some(3));
        let walk = PhaseSelection::RandomNoRepeat {
            personas: PersonaId::ALL.to_vec(),
            max_iterations: 10,
        };
        assert_eq!(walk.planned_calls(), None);
    }
}
