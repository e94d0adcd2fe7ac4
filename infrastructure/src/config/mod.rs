//! Configuration file loading for ideaforge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `IDEAFORGE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./ideaforge.toml` or `./.ideaforge.toml`
//! 4. Global: `$XDG_CONFIG_HOME/ideaforge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBackendConfig, FileCacheConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FilePersonaConfig, FilePersonasConfig, FilePhasesConfig, FileRetryConfig, default_models,
};
pub use loader::ConfigLoader;
