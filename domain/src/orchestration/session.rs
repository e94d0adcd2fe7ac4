//! Per-session accumulated state

use super::entities::Phase;
use super::value_objects::{AgentCallResult, PhaseRecord};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Role of a turn in the caller-supplied conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A prior conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// State of one session (Entity)
///
/// Mutated only by appending sealed [`PhaseRecord`]s, strictly in phase
/// order. Never shared between sessions.
#[derive(Debug, Clone)]
pub struct SessionState {
    original_prompt: String,
    conversation_context: Vec<ConversationTurn>,
    phase_records: Vec<PhaseRecord>,
}

impl SessionState {
    pub fn new(
        original_prompt: impl Into<String>,
        conversation_context: Vec<ConversationTurn>,
    ) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            conversation_context,
            phase_records: Vec::with_capacity(Phase::ALL.len()),
        }
    }

    pub fn original_prompt(&self) -> &str {
        &self.original_prompt
    }

    pub fn conversation_context(&self) -> &[ConversationTurn] {
        &self.conversation_context
    }

    pub fn records(&self) -> &[PhaseRecord] {
        &self.phase_records
    }

    /// Phase whose record is expected next, `None` once all four are in
    pub fn next_phase(&self) -> Option<Phase> {
        Phase::ALL.get(self.phase_records.len()).copied()
    }

    /// Append a sealed record. Records must arrive in phase order.
    pub fn append(&mut self, record: PhaseRecord) -> Result<(), DomainError> {
        let expected = self.next_phase().ok_or(DomainError::SessionComplete)?;
        if record.phase() != expected {
            return Err(DomainError::PhaseOutOfOrder {
                expected: expected.as_str().to_string(),
                actual: record.phase().as_str().to_string(),
            });
        }
        self.phase_records.push(record);
        Ok(())
    }

    pub fn record(&self, phase: Phase) -> Option<&PhaseRecord> {
        self.phase_records.iter().find(|r| r.phase() == phase)
    }

    /// Results of a sealed phase, empty if the phase has not run yet
    pub fn results_of(&self, phase: Phase) -> &[AgentCallResult] {
        self.record(phase).map(PhaseRecord::results).unwrap_or(&[])
    }

    /// Every result accumulated so far, in phase then invocation order
    pub fn accumulated(&self) -> impl Iterator<Item = &AgentCallResult> {
        self.phase_records.iter().flat_map(|r| r.results().iter())
    }

    pub fn into_records(self) -> Vec<PhaseRecord> {
        self.phase_records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestration::value_objects::OpenPhase;
    use crate::persona::PersonaId;
    use std::time::Duration;

    fn sealed(phase: Phase, content: &str) -> PhaseRecord {
        let mut open = OpenPhase::start(phase, Duration::from_secs(1));
        open.push(AgentCallResult::success(
            PersonaId::Creative,
            phase,
            content,
            "m",
            1,
        ));
        open.seal()
    }

    #[test]
    fn test_append_in_order() {
        let mut state = SessionState::new("topic", vec![]);
        for phase in Phase::ALL {
            state.append(sealed(phase, phase.as_str())).unwrap();
        }
        assert_eq!(state.records().len(), 4);
        assert_eq!(state.next_phase(), None);
        let contents: Vec<_> = state.accumulated().map(|r| r.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["foundation", "expansion", "refinement", "synthesis"]
        );
    }

    #[test]
    fn test_append_out_of_order_rejected() {
        let mut state = SessionState::new("topic", vec![]);
        let err = state.append(sealed(Phase::Expansion, "x")).unwrap_err();
        assert!(matches!(err, DomainError::PhaseOutOfOrder { .. }));
        assert!(state.records().is_empty());
    }

    #[test]
    fn test_append_after_complete_rejected() {
        let mut state = SessionState::new("topic", vec![]);
        for phase in Phase::ALL {
            state.append(sealed(phase, "x")).unwrap();
        }
        assert_eq!(
            state.append(sealed(Phase::Synthesis, "x")).unwrap_err(),
            DomainError::SessionComplete
        );
    }

    #[test]
    fn test_results_of_unsealed_phase_is_empty() {
        let state = SessionState::new("topic", vec![ConversationTurn::user("hi")]);
        assert!(state.results_of(Phase::Refinement).is_empty());
        assert_eq!(state.conversation_context().len(), 1);
    }

    #[test]
    fn test_conversation_turn_deserializes() {
        let turns: Vec<ConversationTurn> =
            serde_json::from_str(r#"[{"role":"user","content":"earlier idea"}]"#).unwrap();
        assert_eq!(turns[0].role, Role::User);
    }
}
