//! Persona configuration from TOML (`[personas.<id>]` sections)

use ideaforge_domain::{ConfigurationError, Persona, PersonaId, PersonaRegistry};
use serde::{Deserialize, Serialize};

/// Model pool used when a persona does not name its own
pub fn default_models(id: PersonaId) -> &'static [&'static str] {
    match id {
        PersonaId::Creative => &[
            "meta-llama/llama-3.3-70b-instruct:free",
            "mistralai/mistral-small-3.1-24b-instruct:free",
        ],
        PersonaId::Reasoning => &[
            "deepseek/deepseek-r1:free",
            "qwen/qwq-32b:free",
        ],
        PersonaId::Logical => &[
            "qwen/qwen3-32b:free",
            "google/gemma-3-27b-it:free",
        ],
    }
}

/// One persona's overrides. Unset fields fall back to the built-in profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    /// Replaces the built-in system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl FilePersonaConfig {
    fn builtin(id: PersonaId) -> Self {
        Self {
            display_name: Some(id.default_display_name().to_string()),
            temperature: Some(id.default_temperature()),
            models: Some(default_models(id).iter().map(|m| m.to_string()).collect()),
            instructions: None,
        }
    }

    pub fn to_persona(&self, id: PersonaId) -> Persona {
        let models = self
            .models
            .clone()
            .unwrap_or_else(|| default_models(id).iter().map(|m| m.to_string()).collect());
        let persona = Persona::new(
            id,
            self.temperature.unwrap_or_else(|| id.default_temperature()),
            models,
        );
        let persona = match &self.display_name {
            Some(name) if !name.trim().is_empty() => persona.with_display_name(name.trim()),
            _ => persona,
        };
        match &self.instructions {
            Some(text) if !text.trim().is_empty() => persona.with_instructions(text.trim()),
            _ => persona,
        }
    }
}

/// Raw `[personas]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonasConfig {
    pub creative: FilePersonaConfig,
    pub reasoning: FilePersonaConfig,
    pub logical: FilePersonaConfig,
}

impl Default for FilePersonasConfig {
    fn default() -> Self {
        Self {
            creative: FilePersonaConfig::builtin(PersonaId::Creative),
            reasoning: FilePersonaConfig::builtin(PersonaId::Reasoning),
            logical: FilePersonaConfig::builtin(PersonaId::Logical),
        }
    }
}

impl FilePersonasConfig {
    pub fn get(&self, id: PersonaId) -> &FilePersonaConfig {
        match id {
            PersonaId::Creative => &self.creative,
            PersonaId::Reasoning => &self.reasoning,
            PersonaId::Logical => &self.logical,
        }
    }

    /// Build and validate the registry
    pub fn to_registry(&self) -> Result<PersonaRegistry, ConfigurationError> {
        PersonaRegistry::new(
            PersonaId::ALL
                .iter()
                .map(|id| self.get(*id).to_persona(*id))
                .collect(),
        )
    }
}
