//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Every section is
//! `#[serde(default)]`, so a file only needs the keys it overrides.

mod backend;
mod cache;
mod logging;
mod output;
mod personas;
mod phases;

pub use backend::{FileBackendConfig, FileRetryConfig};
pub use cache::FileCacheConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use personas::{FilePersonaConfig, FilePersonasConfig, default_models};
pub use phases::FilePhasesConfig;

use ideaforge_application::OrchestrationConfig;
use ideaforge_domain::{ConfigurationError, PersonaRegistry};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    pub personas: FilePersonasConfig,
    pub phases: FilePhasesConfig,
    pub cache: FileCacheConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Check everything a session needs before it starts.
    ///
    /// Credentials are not checked here; the backend reports them.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigurationError::Invalid(
                "backend.base_url cannot be empty".to_string(),
            ));
        }
        self.persona_registry()?;
        self.orchestration_config().validate()
    }

    pub fn persona_registry(&self) -> Result<PersonaRegistry, ConfigurationError> {
        self.personas.to_registry()
    }

    pub fn orchestration_config(&self) -> OrchestrationConfig {
        let config = OrchestrationConfig::default()
            .with_call_timeout(Duration::from_secs(self.backend.call_timeout_secs))
            .with_max_tokens(self.backend.max_tokens, self.backend.synthesis_max_tokens);
        self.phases.apply(config)
    }

    /// Copy safe to print: inline secrets are masked.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.backend.api_key.is_some() {
            config.backend.api_key = Some("****".to_string());
        }
        config
    }

    /// Redacted TOML rendering for `--show-config`
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&self.redacted())
    }
}
