//! Persona entities

use crate::core::error::DomainError;
use crate::prompt::IdeationPrompt;
use serde::{Deserialize, Serialize};

/// Identifier of a persona (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    /// Divergent thinking, high temperature
    Creative,
    /// Step-by-step reasoning; also drives the final synthesis
    Reasoning,
    /// Feasibility and structure, low temperature
    Logical,
}

impl PersonaId {
    pub const ALL: [PersonaId; 3] = [PersonaId::Creative, PersonaId::Reasoning, PersonaId::Logical];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Creative => "creative",
            PersonaId::Reasoning => "reasoning",
            PersonaId::Logical => "logical",
        }
    }

    /// Default display name used when configuration does not override it
    pub fn default_display_name(&self) -> &'static str {
        match self {
            PersonaId::Creative => "Creative Agent",
            PersonaId::Reasoning => "Reasoning Agent",
            PersonaId::Logical => "Logical Agent",
        }
    }

    /// Default sampling temperature
    pub fn default_temperature(&self) -> f32 {
        match self {
            PersonaId::Creative => 0.9,
            PersonaId::Reasoning => 0.6,
            PersonaId::Logical => 0.3,
        }
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creative" => Ok(PersonaId::Creative),
            "reasoning" => Ok(PersonaId::Reasoning),
            "logical" => Ok(PersonaId::Logical),
            other => Err(DomainError::UnknownPersona(other.to_string())),
        }
    }
}

/// A persona's calling profile (Entity)
///
/// Immutable once built. Blank model names are dropped on construction;
/// the remaining pool is checked for emptiness by
/// [`PersonaRegistry::new`](super::PersonaRegistry::new), not here, so that
/// configuration loading can report every problem through one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Persona {
    id: PersonaId,
    display_name: String,
    temperature: f32,
    model_pool: Vec<String>,
    instructions: String,
}

impl Persona {
    pub fn new(id: PersonaId, temperature: f32, model_pool: Vec<String>) -> Self {
        Self {
            id,
            display_name: id.default_display_name().to_string(),
            temperature,
            model_pool: model_pool
                .into_iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect(),
            instructions: IdeationPrompt::persona_system(id).to_string(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn id(&self) -> PersonaId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn model_pool(&self) -> &[String] {
        &self.model_pool
    }

    /// Standing system instructions sent with every call
    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_id_roundtrip() {
        for id in PersonaId::ALL {
            let parsed: PersonaId = id.as_str().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_persona_id_parse_is_case_insensitive() {
        assert_eq!("Creative".parse::<PersonaId>().unwrap(), PersonaId::Creative);
        assert!("critic".parse::<PersonaId>().is_err());
    }

    #[test]
    fn test_persona_id_serde_lowercase() {
        let json = serde_json::to_string(&PersonaId::Logical).unwrap();
        assert_eq!(json, "\"logical\"");
    }

    #[test]
    fn test_persona_defaults() {
        let persona = Persona::new(PersonaId::Creative, 0.9, vec!["model-a".to_string()]);
        assert_eq!(persona.display_name(), "Creative Agent");
        assert!(!persona.instructions().is_empty());
        assert_eq!(persona.model_pool(), ["model-a".to_string()]);
    }
}
