//! Persona registry

use super::entities::{Persona, PersonaId};
use super::random::RandomSource;
use crate::core::error::ConfigurationError;

/// Fixed mapping from [`PersonaId`] to [`Persona`].
///
/// Built once at startup; construction fails fast on misconfiguration so
/// that `lookup` and `pick_model` are infallible afterwards. Read-only, so
/// it can be shared behind an `Arc` across concurrent sessions.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    creative: Persona,
    reasoning: Persona,
    logical: Persona,
}

impl PersonaRegistry {
    /// Build a registry from exactly one persona per [`PersonaId`].
    pub fn new(personas: Vec<Persona>) -> Result<Self, ConfigurationError> {
        for persona in &personas {
            Self::validate_persona(persona)?;
        }

        let take = |id: PersonaId| {
            personas
                .iter()
                .find(|p| p.id() == id)
                .cloned()
                .ok_or(ConfigurationError::MissingPersona(id))
        };

        Ok(Self {
            creative: take(PersonaId::Creative)?,
            reasoning: take(PersonaId::Reasoning)?,
            logical: take(PersonaId::Logical)?,
        })
    }

    /// Registry with default temperatures and display names, every persona
    /// drawing from the same model pool.
    pub fn with_shared_pool(models: &[&str]) -> Result<Self, ConfigurationError> {
        let pool: Vec<String> = models.iter().map(|m| m.to_string()).collect();
        Self::new(
            PersonaId::ALL
                .iter()
                .map(|id| Persona::new(*id, id.default_temperature(), pool.clone()))
                .collect(),
        )
    }

    fn validate_persona(persona: &Persona) -> Result<(), ConfigurationError> {
        if persona.model_pool().is_empty() {
            return Err(ConfigurationError::EmptyModelPool(persona.id()));
        }
        let temperature = persona.temperature();
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigurationError::InvalidTemperature {
                persona: persona.id(),
                value: temperature,
            });
        }
        Ok(())
    }

    pub fn lookup(&self, id: PersonaId) -> &Persona {
        match id {
            PersonaId::Creative => &self.creative,
            PersonaId::Reasoning => &self.reasoning,
            PersonaId::Logical => &self.logical,
        }
    }

    /// Pick one model uniformly at random from the persona's pool.
    pub fn pick_model(&self, id: PersonaId, random: &dyn RandomSource) -> &str {
        let pool = self.lookup(id).model_pool();
        let index = random.next_index(pool.len()) % pool.len();
        &pool[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Cycle(AtomicUsize);

    impl RandomSource for Cycle {
        fn next_index(&self, upper: usize) -> usize {
            self.0.fetch_add(1, Ordering::SeqCst) % upper
        }
    }

    fn persona(id: PersonaId, models: &[&str]) -> Persona {
        Persona::new(
            id,
            id.default_temperature(),
            models.iter().map(|m| m.to_string()).collect(),
        )
    }

    #[test]
    fn test_lookup_returns_configured_persona() {
        let registry = PersonaRegistry::with_shared_pool(&["m1"]).unwrap();
        for id in PersonaId::ALL {
            assert_eq!(registry.lookup(id).id(), id);
        }
        assert_eq!(registry.lookup(PersonaId::Logical).temperature(), 0.3);
    }

    #[test]
    fn test_empty_pool_fails_fast() {
        let result = PersonaRegistry::new(vec![
            persona(PersonaId::Creative, &["m1"]),
            persona(PersonaId::Reasoning, &[]),
            persona(PersonaId::Logical, &["m1"]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::EmptyModelPool(PersonaId::Reasoning)
        );
    }

    #[test]
    fn test_blank_model_names_count_as_empty() {
        let result = PersonaRegistry::new(vec![
            persona(PersonaId::Creative, &["  "]),
            persona(PersonaId::Reasoning, &["m1"]),
            persona(PersonaId::Logical, &["m1"]),
        ]);
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyModelPool(PersonaId::Creative))
        ));
    }

    #[test]
    fn test_missing_persona_fails() {
        let result = PersonaRegistry::new(vec![
            persona(PersonaId::Creative, &["m1"]),
            persona(PersonaId::Reasoning, &["m1"]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::MissingPersona(PersonaId::Logical)
        );
    }

    #[test]
    fn test_invalid_temperature_fails() {
        let result = PersonaRegistry::new(vec![
            Persona::new(PersonaId::Creative, 3.5, vec!["m1".to_string()]),
            persona(PersonaId::Reasoning, &["m1"]),
            persona(PersonaId::Logical, &["m1"]),
        ]);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidTemperature { persona: PersonaId::Creative, .. })
        ));
    }

    #[test]
    fn test_pick_model_draws_from_pool() {
        let registry = PersonaRegistry::new(vec![
            persona(PersonaId::Creative, &["a", "b", "c"]),
            persona(PersonaId::Reasoning, &["r"]),
            persona(PersonaId::Logical, &["l"]),
        ])
        .unwrap();
        let random = Cycle(AtomicUsize::new(0));

        let picks: Vec<&str> = (0..4)
            .map(|_| registry.pick_model(PersonaId::Creative, &random))
            .collect();
        assert_eq!(picks, vec!["a", "b", "c", "a"]);
        assert_eq!(registry.pick_model(PersonaId::Logical, &random), "l");
    }
}
