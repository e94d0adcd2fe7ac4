//! Prompt templates for the ideation flow

use crate::core::string::truncate;
use crate::orchestration::entities::Phase;
use crate::orchestration::session::SessionState;
use crate::orchestration::value_objects::AgentCallResult;
use crate::persona::PersonaId;

/// Conversation turns longer than this are cut before being quoted
const MAX_CONTEXT_TURN_BYTES: usize = 1500;

/// Section names the synthesis call is asked to produce
pub const SYNTHESIS_SECTIONS: [&str; 5] = [
    "Executive Summary",
    "Phase Recap",
    "Detailed Ideas",
    "Recommendation",
    "Action Plan",
];

/// Templates for generating prompts at each stage
pub struct IdeationPrompt;

impl IdeationPrompt {
    /// Standing system instructions for each persona
    pub fn persona_system(id: PersonaId) -> &'static str {
        match id {
            PersonaId::Creative => {
                r#"You are the creative member of an ideation team.
Generate bold, original concepts and unexpected combinations.
Prefer breadth and novelty over polish, but keep every idea concrete enough to act on.
Name each concept so others can refer to it."#
            }
            PersonaId::Logical => {
                r#"You are the logical member of an ideation team.
Evaluate ideas for feasibility, cost, risk and dependencies.
Structure your answer, call out weak assumptions, and strengthen the ideas that survive scrutiny.
Refer to concepts by the names already given to them."#
            }
            PersonaId::Reasoning => {
                r#"You are the reasoning member of an ideation team.
Think through trade-offs step by step, connect ideas across contributions, and draw conclusions.
Be explicit about why one option beats another.
Refer to concepts by the names already given to them."#
            }
        }
    }

    /// User prompt for one step of a non-synthesis phase.
    ///
    /// Carries the original request, the caller's conversation, every sealed
    /// phase in `state`, and the results produced so far in the current phase.
    pub fn phase_step(
        phase: Phase,
        persona: PersonaId,
        state: &SessionState,
        current: &[AgentCallResult],
    ) -> String {
        let mut prompt = Self::preamble(state);

        for record in state.records() {
            Self::push_results(
                &mut prompt,
                &format!("Phase {}: {}", record.phase().number(), record.phase()),
                record.results(),
            );
        }

        if !current.is_empty() {
            Self::push_results(
                &mut prompt,
                &format!("Phase {}: {} (so far)", phase.number(), phase),
                current,
            );
        }

        prompt.push_str(&format!(
            "\nYou are the {} agent.\n{}\n",
            persona,
            Self::phase_task(phase)
        ));
        prompt
    }

    /// User prompt for the final synthesis call
    pub fn synthesis(state: &SessionState) -> String {
        let mut prompt = Self::preamble(state);

        for phase in [Phase::Foundation, Phase::Expansion, Phase::Refinement] {
            let title = format!("Phase {}: {}", phase.number(), phase);
            match state.record(phase) {
                Some(record) if record.is_skipped() => {
                    prompt.push_str(&format!("\n=== {} ===\n(skipped)\n", title));
                }
                Some(record) if !record.results().is_empty() => {
                    Self::push_results(&mut prompt, &title, record.results());
                }
                _ => {
                    prompt.push_str(&format!("\n=== {} ===\n(no contributions)\n", title));
                }
            }
        }

        prompt.push_str(
            "\nSelect the one or two most viable concepts from the work above and write the final report.\n\
             Use exactly these markdown sections, in order:\n",
        );
        for section in SYNTHESIS_SECTIONS {
            prompt.push_str(&format!("## {}\n", section));
        }
        prompt.push_str(
            r#"
- Executive Summary: the request and the chosen concept(s) in a few sentences
- Phase Recap: what each phase contributed
- Detailed Ideas: each chosen concept with its mechanics, benefits and risks
- Recommendation: name the concept you recommend and why
- Action Plan: staged next steps (short term, medium term, long term)"#,
        );
        prompt
    }

    fn preamble(state: &SessionState) -> String {
        let mut prompt = format!("Original request: {}\n", state.original_prompt());

        if !state.conversation_context().is_empty() {
            prompt.push_str("\nConversation so far:\n");
            for turn in state.conversation_context() {
                prompt.push_str(&format!(
                    "- {}: {}\n",
                    turn.role.as_str(),
                    truncate(&turn.content, MAX_CONTEXT_TURN_BYTES)
                ));
            }
        }
        prompt
    }

    fn push_results(prompt: &mut String, title: &str, results: &[AgentCallResult]) {
        prompt.push_str(&format!("\n=== {} ===\n", title));
        for (i, result) in results.iter().enumerate() {
            prompt.push_str(&format!(
                "\n--- Contribution {} ({}) ---\n{}\n",
                i + 1,
                result.persona,
                result.content
            ));
        }
    }

    fn phase_task(phase: Phase) -> &'static str {
        match phase {
            Phase::Foundation => {
                "Build on the contributions above (if any) and lay down foundational concepts for the request. \
                 Name each concept and describe it briefly."
            }
            Phase::Expansion => {
                "Expand the idea space: extend, combine or challenge the concepts above. \
                 Add something none of the earlier contributions covered."
            }
            Phase::Refinement => {
                "Refine the strongest concepts above into concrete, feasible proposals. \
                 Drop weak ideas explicitly and explain what makes the survivors viable."
            }
            Phase::Synthesis => "Synthesize everything above into a final report.",
        }
    }
}
