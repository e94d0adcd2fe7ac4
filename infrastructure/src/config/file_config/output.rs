//! Output configuration from TOML (`[output]` section)

use ideaforge_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `None` leaves the choice to the CLI default (`report`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let config: FileOutputConfig = toml::from_str(r#"format = "full""#).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Full));
        assert!(config.color);
    }
}
