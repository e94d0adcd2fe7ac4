//! Local fallback content
//!
//! Deterministic text substituted when a backend call fails or a phase
//! deadline prevents a call. Always non-empty and always mentions the
//! original request.

use super::template::SYNTHESIS_SECTIONS;
use crate::core::string::{first_meaningful_line, truncate};
use crate::orchestration::entities::Phase;
use crate::orchestration::session::SessionState;
use crate::persona::PersonaId;

const MAX_CONCEPT_BYTES: usize = 160;

pub struct FallbackTemplate;

impl FallbackTemplate {
    /// Stand-in for one persona's contribution to a phase
    pub fn agent(persona: PersonaId, phase: Phase, prompt: &str) -> String {
        let angle = match persona {
            PersonaId::Creative => "explore unconventional angles and name candidate concepts",
            PersonaId::Logical => "check feasibility, cost and risk of each candidate",
            PersonaId::Reasoning => "weigh the trade-offs between the candidates",
        };
        let step = match phase {
            Phase::Foundation => "Baseline concept",
            Phase::Expansion => "Expansion note",
            Phase::Refinement => "Refinement note",
            Phase::Synthesis => "Synthesis note",
        };
        format!(
            "[{} fallback, phase {}: {}]\n{}: \"{}\" as stated by the requester.\n\
             The {} perspective was unavailable for this step; the next contributor should {}.",
            persona.default_display_name(),
            phase.number(),
            phase,
            step,
            prompt.trim(),
            persona,
            angle,
        )
    }

    /// Stand-in for the synthesis report, built from the sealed phases.
    ///
    /// Recommends the first concept found in Phase 1 backend output, or the
    /// request itself when Phase 1 produced only fallbacks.
    pub fn synthesis(state: &SessionState) -> String {
        let prompt = state.original_prompt().trim();
        let concept = Self::leading_concept(state).unwrap_or_else(|| prompt.to_string());

        let recap: Vec<String> = [Phase::Foundation, Phase::Expansion, Phase::Refinement]
            .iter()
            .map(|phase| {
                let results = state.results_of(*phase);
                let succeeded = results.iter().filter(|r| r.succeeded).count();
                format!(
                    "- Phase {} ({}): {} contribution(s), {} from the backend",
                    phase.number(),
                    phase,
                    results.len(),
                    succeeded
                )
            })
            .collect();

        let mut sections = Vec::with_capacity(SYNTHESIS_SECTIONS.len());
        sections.push(format!(
            "## {}\nAutomated synthesis for \"{}\". The synthesis step was unavailable, \
             so this report is assembled from the phase contributions directly.",
            SYNTHESIS_SECTIONS[0], prompt
        ));
        sections.push(format!("## {}\n{}", SYNTHESIS_SECTIONS[1], recap.join("\n")));
        sections.push(format!(
            "## {}\n- {}: the leading concept from the foundation phase.",
            SYNTHESIS_SECTIONS[2], concept
        ));
        sections.push(format!(
            "## {}\nPursue \"{}\" first; it was the earliest concept put forward for \"{}\".",
            SYNTHESIS_SECTIONS[3], concept, prompt
        ));
        sections.push(format!(
            "## {}\n1. Short term: validate \"{}\" with a small pilot.\n\
             2. Medium term: address the risks raised during refinement.\n\
             3. Long term: scale what the pilot proves.",
            SYNTHESIS_SECTIONS[4], concept
        ));
        sections.join("\n\n")
    }

    fn leading_concept(state: &SessionState) -> Option<String> {
        state
            .results_of(Phase::Foundation)
            .iter()
            .filter(|r| r.succeeded)
            .find_map(|r| Self::concept_line(&r.content))
            .map(|line| truncate(&line, MAX_CONCEPT_BYTES))
    }

    /// First meaningful line outside markdown headings
    fn concept_line(content: &str) -> Option<String> {
        let body: Vec<&str> = content
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .collect();
        first_meaningful_line(&body.join("\n")).or_else(|| first_meaningful_line(content))
    }
}
