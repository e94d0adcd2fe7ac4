//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ideaforge";
const PROJECT_FILES: [&str; 2] = ["ideaforge.toml", ".ideaforge.toml"];
const ENV_PREFIX: &str = "IDEAFORGE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `IDEAFORGE_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ideaforge.toml` or `./.ideaforge.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/ideaforge/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config sources and whether each was found
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mark = |found: bool| if found { "[FOUND]" } else { "[     ]" };
        let mut lines = Vec::new();

        if let Some(path) = config_path {
            lines.push(format!("  {} Explicit: {}", mark(path.exists()), path.display()));
        }
        match Self::project_config_path() {
            Some(path) => lines.push(format!("  {} Project: {}", mark(true), path.display())),
            None => lines.push(format!(
                "  {} Project: ./{} or ./{}",
                mark(false),
                PROJECT_FILES[0],
                PROJECT_FILES[1]
            )),
        }
        if let Some(path) = Self::global_config_path() {
            lines.push(format!("  {} Global:  {}", mark(path.exists()), path.display()));
        }
        lines.push(format!("  [     ] Env:     {}*", ENV_PREFIX));
        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use ideaforge_domain::{OutputFormat, PersonaId, Phase};
    use std::time::Duration;

    fn load(path: Option<&Path>) -> figment::error::Result<FileConfig> {
        ConfigLoader::load(path).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
        assert!(config.cache.enabled);
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains(APP_DIR));
        }
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "ideaforge.toml",
                r#"
[phases]
expansion_budget_secs = 30

[personas.logical]
temperature = 0.2
"#,
            )?;

            let config = load(None)?;
            assert_eq!(
                config.orchestration_config().budgets.get(Phase::Expansion),
                Duration::from_secs(30)
            );
            assert_eq!(config.personas.logical.temperature, Some(0.2));
            // untouched keys keep their defaults
            assert_eq!(config.phases.foundation_budget_secs, 180);
            assert!(config.personas.logical.models.is_some());
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        Jail::expect_with(|jail| {
            jail.create_file(".ideaforge.toml", "[output]\nformat = \"full\"\n")?;

            let config = load(None)?;
            assert_eq!(config.output.format, Some(OutputFormat::Full));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ideaforge.toml", "[cache]\nttl_secs = 10\n")?;
            jail.create_file("custom.toml", "[cache]\nttl_secs = 20\n")?;

            let config = load(Some(Path::new("custom.toml")))?;
            assert_eq!(config.cache.ttl_secs, 20);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("ideaforge.toml", "[phases]\nexpansion_budget_secs = 30\n")?;
            jail.set_env("IDEAFORGE_PHASES__EXPANSION_BUDGET_SECS", "5");
            jail.set_env("IDEAFORGE_BACKEND__BASE_URL", "http://127.0.0.1:9000/v1");

            let config = load(None)?;
            assert_eq!(config.phases.expansion_budget_secs, 5);
            assert_eq!(config.backend.base_url, "http://127.0.0.1:9000/v1");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("ideaforge.toml", "[phases]\nexpansion_budget_secs = \"soon\"\n")?;

            assert!(load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_loaded_registry_is_usable() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "ideaforge.toml",
                "[personas.creative]\nmodels = [\"a/one\", \"b/two\"]\n",
            )?;

            let config = load(None)?;
            let registry = config.persona_registry().unwrap();
            assert_eq!(registry.lookup(PersonaId::Creative).model_pool().len(), 2);
            Ok(())
        });
    }
}
